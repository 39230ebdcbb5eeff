//! Outer sweep over candidate maximum abbreviation lengths.
//!
//! Each candidate length gets its own greedy run on a fresh copy of the
//! input texts; the run with the smallest total encoded length wins. The
//! sweep is the unit of cancellation: an interrupt is observed between
//! runs, never inside one, so the best result so far is always reported.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::selector::{select, Selection};

/// Sweep parameters.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Smallest maximum abbreviation length to try.
    pub min_candidate_len: usize,
    /// Largest maximum abbreviation length to try.
    pub max_candidate_len: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_candidate_len: 3,
            max_candidate_len: 30,
        }
    }
}

impl SweepConfig {
    /// Number of selector runs the sweep will perform.
    pub fn steps(&self) -> usize {
        if self.max_candidate_len < self.min_candidate_len {
            0
        } else {
            self.max_candidate_len - self.min_candidate_len + 1
        }
    }
}

/// Cooperative cancellation flag, shared with e.g. a Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The winning run of a sweep.
#[derive(Debug, Clone)]
pub struct SweepBest {
    /// Chosen abbreviations, in selection order.
    pub abbreviations: Vec<String>,
    /// The maximum abbreviation length that produced this run.
    pub max_len: usize,
    /// Total encoded length under this table.
    pub encoded_len: usize,
}

/// Result of a completed or interrupted sweep.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Best run found; `None` only if no run completed before cancellation.
    pub best: Option<SweepBest>,
    /// Encoded length of the input texts before compression, one
    /// terminator byte per string.
    pub original_len: usize,
}

impl SweepOutcome {
    /// Bytes saved by the winning run; negative when the table overhead
    /// outweighs the extraction gains.
    pub fn saved(&self) -> i64 {
        match &self.best {
            Some(best) => self.original_len as i64 - best.encoded_len as i64,
            None => 0,
        }
    }
}

/// Run the greedy selector once per candidate maximum length, keeping the
/// run whose encoded length is strictly smaller than any seen before it.
///
/// `on_step` fires after every completed run with the length tried and its
/// [`Selection`]; progress indicators hook in here without altering control
/// flow.
pub fn sweep<F>(
    texts: &[String],
    config: &SweepConfig,
    cancel: &CancelFlag,
    mut on_step: F,
) -> SweepOutcome
where
    F: FnMut(usize, &Selection),
{
    let original_len = texts.iter().map(|text| text.chars().count() + 1).sum();
    let mut best: Option<SweepBest> = None;

    for max_len in config.min_candidate_len..=config.max_candidate_len {
        if cancel.is_cancelled() {
            debug!(max_len, "sweep interrupted, keeping best result so far");
            break;
        }
        let selection = select(texts, max_len);
        debug!(
            max_len,
            encoded_len = selection.encoded_len,
            abbreviations = selection.abbreviations.len(),
            "completed length sweep step"
        );
        on_step(max_len, &selection);

        if best
            .as_ref()
            .map_or(true, |b| selection.encoded_len < b.encoded_len)
        {
            best = Some(SweepBest {
                abbreviations: selection.abbreviations,
                max_len,
                encoded_len: selection.encoded_len,
            });
        }
    }

    SweepOutcome { best, original_len }
}
