//! # toktab - Abbreviation tables for DAAD adventure databases
//!
//! Computes an abbreviation table for the texts of a DAAD database and
//! encodes it as the fixed 129-entry hex token table older interpreters
//! consume. Up to 128 substrings are chosen so that replacing each
//! occurrence with a single-byte token minimizes the total encoded size of
//! the texts.
//!
//! ## Pipeline
//!
//! ```text
//! database.json ──> texts ──> length sweep ──> best table ──> hex tokens
//!                               │
//!                               └─ one greedy selector run per candidate
//!                                  maximum abbreviation length (3..=30)
//! ```
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use toktab::{codec, corpus::Database, search};
//!
//! let database = Database::load("game.json")?;
//! let texts = database.texts();
//!
//! let outcome = search::sweep(
//!     &texts,
//!     &search::SweepConfig::default(),
//!     &search::CancelFlag::new(),
//!     |_, _| {},
//! );
//!
//! let abbreviations = outcome.best.map(|b| b.abbreviations).unwrap_or_default();
//! let (tokens, warnings) = codec::encode(&abbreviations, true);
//! assert_eq!(tokens.len(), 129);
//! ```
//!
//! ## Modules
//!
//! - [`corpus`]: database loading and the output token file
//! - [`search`]: occurrence counting, greedy selection, length sweep
//! - [`codec`]: legacy byte/hex token encoding
//! - [`error`]: error types and result alias
//!
//! The search runs single-threaded and rescans the working corpus on every
//! selector iteration; the working corpus also grows as extraction splits
//! strings into fragments. Both are deliberate simplicity trade-offs, so
//! very large databases pay in time and memory, not correctness.

pub mod codec;
pub mod corpus;
pub mod error;
pub mod search;

// Re-exports for convenience
pub use codec::{encode, EncodeWarning};
pub use corpus::{Database, TextEntry, TokenFile};
pub use error::{Result, TokError};
pub use search::{sweep, CancelFlag, Selection, SweepConfig, SweepOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
