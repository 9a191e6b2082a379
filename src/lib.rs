#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pipeline configuration types.
pub mod config;
/// Centralized constants: negation vocabulary, thresholds, defaults.
pub mod constants;
/// Example records and gold labels.
pub mod data;
/// Hard-example heuristics (negation, overlap, combined decision).
pub mod heuristics;
/// Label-balance metrics for reporting.
pub mod metrics;
/// End-to-end pipeline orchestration.
pub mod pipeline;
/// Label grouping and stratified selection.
pub mod sampler;
/// Example source trait and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Tokenizer and token-set helpers.
pub mod utils;
/// JSONL output writer.
pub mod writer;

mod errors;

pub use config::ChallengeConfig;
pub use data::{Example, Label, RawExample};
pub use errors::ChallengeError;
pub use heuristics::{has_negation, lexical_overlap, HardCriteria};
pub use metrics::{label_balance, LabelBalance, LabelShare};
pub use pipeline::{build_challenge_set, ChallengeReport};
pub use sampler::{select_challenge_set, select_challenge_set_seeded, LabelGroups};
pub use source::{ExampleSource, InMemorySource, JsonlFileSource};
#[cfg(feature = "huggingface")]
pub use source::{SnliHubConfig, SnliHubSource};
pub use types::{Sentence, SourceId, Token};
pub use utils::{token_set, tokenize};
pub use writer::write_jsonl;
