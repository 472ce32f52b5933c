//! Word association analysis and sentence segmentation
//!
//! This crate provides the two text pipelines behind the `collocate` tools:
//!
//! - a streaming skip-gram association counter ([`AssociationBuilder`]) that
//!   builds a symmetric word-pair table, plus the reporting functions that
//!   derive percentage breakdowns and Shannon entropy from it;
//! - a buffered sentence segmenter ([`Segmenter`]) that rebuilds sentences
//!   from a chunked character stream, merging very short fragments and
//!   flagging suspiciously short sentences.
//!
//! The pipelines share no state.

#![warn(missing_docs)]

pub mod association;
pub mod config;
pub mod error;
pub mod format;
pub mod report;
pub mod segmenter;

// Re-export key types
pub use association::{AssociationBuilder, AssociationTable, DEFAULT_SKIP_SIZE};
pub use config::{AssociationConfig, SegmenterConfig};
pub use error::{CoreError, Result};
pub use format::format_general;
pub use report::{entropy, rank_by_entropy, report, Association, WordEntropy};
pub use segmenter::{
    Segmenter, SegmenterBuilder, Sentence, Sentences, Warning, NON_BREAKING_ABBREVIATIONS,
};
