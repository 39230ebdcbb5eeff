//! Abbreviation search.
//!
//! Three layers, leaf first: [`count_occurrences`] tallies candidate
//! substrings over the working corpus, [`select`] greedily builds one
//! abbreviation table for a fixed maximum length, and [`sweep`] tries a
//! range of maximum lengths and keeps the table with the smallest total
//! encoded size.
//!
//! The search is heuristic: a greedy strategy with a superset merge, not a
//! solver for a globally minimal encoding.

mod counter;
mod selector;
mod sweep;

pub use counter::{count_occurrences, CandidateStats};
pub use selector::{select, Selection, MAX_ABBREVIATIONS, MIN_ABBREVIATION_LEN};
pub use sweep::{sweep, CancelFlag, SweepBest, SweepConfig, SweepOutcome};
