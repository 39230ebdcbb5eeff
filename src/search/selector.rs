//! Greedy abbreviation selection.
//!
//! One run repeatedly takes the highest-savings candidate from the current
//! working corpus, merges it into a superset candidate when the combined
//! savings are higher, and removes its occurrences by splitting the
//! affected strings. Leftover fragments rejoin the corpus so later picks
//! can mine them.

use tracing::trace;

use super::counter::{count_occurrences, CandidateStats};

/// Maximum number of abbreviations in a table.
pub const MAX_ABBREVIATIONS: usize = 128;

/// Minimum abbreviation length considered by every search.
pub const MIN_ABBREVIATION_LEN: usize = 2;

/// Number of chosen abbreviations after which superset merging is skipped.
const SUPERSET_CUTOFF: usize = 100;

/// Result of one greedy selection run.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Chosen abbreviations, in selection order.
    pub abbreviations: Vec<String>,
    /// Total encoded length of the corpus under this table: abbreviation
    /// definitions, one terminator per remaining fragment, and one byte per
    /// unused table slot.
    pub encoded_len: usize,
}

/// Run the greedy selector over `texts` with the given maximum
/// abbreviation length.
pub fn select(texts: &[String], max_len: usize) -> Selection {
    let mut corpus: Vec<String> = texts.to_vec();
    let mut abbreviations: Vec<String> = Vec::new();
    let mut table_len = 0;

    while abbreviations.len() < MAX_ABBREVIATIONS {
        let Some((best, savings)) = pick(&corpus, max_len, abbreviations.len()) else {
            break;
        };
        if savings < 1 {
            break;
        }
        trace!(abbreviation = %best, savings, "chose abbreviation");
        table_len += best.chars().count();
        extract(&mut corpus, &best);
        abbreviations.push(best);
    }

    let mut encoded_len = table_len;
    for fragment in &corpus {
        encoded_len += fragment.chars().count() + 1;
    }
    if abbreviations.len() < MAX_ABBREVIATIONS {
        encoded_len += MAX_ABBREVIATIONS - abbreviations.len();
    }

    Selection {
        abbreviations,
        encoded_len,
    }
}

/// Choose the next abbreviation: the top-ranked candidate, possibly
/// replaced by a superset whose combined savings are strictly higher.
///
/// Candidates are ranked by savings descending, ties broken by substring
/// ascending, so selection is deterministic for a given corpus.
fn pick(corpus: &[String], max_len: usize, chosen_so_far: usize) -> Option<(String, usize)> {
    let stats = count_occurrences(corpus, MIN_ABBREVIATION_LEN, max_len);
    if stats.is_empty() {
        return None;
    }

    let mut ranked: Vec<(&str, CandidateStats)> = stats.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.savings.cmp(&a.1.savings).then_with(|| a.0.cmp(b.0)));

    let (best, best_stats) = ranked[0];
    let mut winner = best;
    let mut winner_savings = best_stats.savings;

    if chosen_so_far < SUPERSET_CUTOFF {
        // Replacing `best` with a superset keeps the superset's own savings
        // and still abbreviates the leftover occurrences of `best` itself.
        let unit = best.chars().count() - 1;
        for &(candidate, candidate_stats) in &ranked[1..] {
            if !candidate.contains(best) {
                continue;
            }
            let combined = candidate_stats.savings
                + (best_stats.occurrences - candidate_stats.occurrences) * unit;
            if combined > winner_savings {
                winner = candidate;
                winner_savings = combined;
            }
        }
    }

    Some((winner.to_string(), winner_savings))
}

/// Remove every occurrence of `abbreviation` from the corpus. The first
/// fragment of each split stays in place; the rest are appended to the
/// corpus as new entries.
fn extract(corpus: &mut Vec<String>, abbreviation: &str) {
    let mut fresh: Vec<String> = Vec::new();
    for entry in corpus.iter_mut() {
        if !entry.contains(abbreviation) {
            continue;
        }
        let mut parts = entry.split(abbreviation).map(String::from);
        if let Some(first) = parts.next() {
            let rest: Vec<String> = parts.collect();
            *entry = first;
            fresh.extend(rest);
        }
    }
    corpus.append(&mut fresh);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_selects_nothing() {
        let selection = select(&[], 30);
        assert!(selection.abbreviations.is_empty());
        // 128 unused slots still cost one byte each
        assert_eq!(selection.encoded_len, MAX_ABBREVIATIONS);
    }

    #[test]
    fn test_highest_savings_candidate_wins_first() {
        let corpus = corpus(&["hello world", "hello there", "say hello"]);
        let selection = select(&corpus, 5);
        assert_eq!(selection.abbreviations[0], "hello");
    }

    #[test]
    fn test_superset_merge_on_tied_savings() {
        // "aa" and "aaa" tie at savings 2; "aa" ranks first
        // lexicographically, but merging into the superset "aaa" combines
        // to 2 + (2 - 1) * 1 = 3 and wins.
        let corpus = corpus(&["aaa"]);
        let selection = select(&corpus, 3);
        assert_eq!(selection.abbreviations[0], "aaa");
    }

    #[test]
    fn test_extract_keeps_first_fragment_in_place() {
        let mut corpus = corpus(&["one, two, three", "four"]);
        extract(&mut corpus, ", ");
        assert_eq!(corpus, vec!["one", "four", "two", "three"]);
    }

    #[test]
    fn test_extract_fragments_reconstruct_original() {
        let mut corpus = corpus(&["aaa"]);
        extract(&mut corpus, "aaa");
        // Splitting "aaa" on itself leaves two empty fragments; joining
        // them back with the abbreviation restores the original.
        assert_eq!(corpus.join("aaa"), "aaa");
    }

    #[test]
    fn test_table_never_exceeds_capacity() {
        // Plenty of distinct repeated pairs to keep the selector busy
        let mut texts = Vec::new();
        for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                let pair: String = [a as char, b as char].iter().collect();
                texts.push(pair.repeat(4));
            }
        }
        let selection = select(&texts, 4);
        assert!(selection.abbreviations.len() <= MAX_ABBREVIATIONS);
    }

    #[test]
    fn test_abbreviations_occur_in_original_corpus() {
        let texts = corpus(&["the cat sat on the mat", "the dog ate the log"]);
        let selection = select(&texts, 8);
        for abbreviation in &selection.abbreviations {
            assert!(
                texts.iter().any(|t| t.contains(abbreviation.as_str())),
                "{abbreviation:?} never occurs in the input"
            );
        }
    }

    #[test]
    fn test_encoded_length_accounts_for_every_term() {
        // One string, one obvious abbreviation
        let texts = corpus(&["ababab"]);
        let selection = select(&texts, 6);

        // Whatever was chosen, the reported length must match a recount:
        // definitions + fragments with terminators + unused slots.
        let mut expected = 0;
        let mut working = texts.clone();
        for abbreviation in &selection.abbreviations {
            expected += abbreviation.chars().count();
            extract(&mut working, abbreviation);
        }
        for fragment in &working {
            expected += fragment.chars().count() + 1;
        }
        expected += MAX_ABBREVIATIONS - selection.abbreviations.len();
        assert_eq!(selection.encoded_len, expected);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let texts = corpus(&["mirror mirror on the wall", "the wall looks back"]);
        let first = select(&texts, 10);
        let second = select(&texts, 10);
        assert_eq!(first.abbreviations, second.abbreviations);
        assert_eq!(first.encoded_len, second.encoded_len);
    }
}
