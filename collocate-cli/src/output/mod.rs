//! Output formatting module

use anyhow::Result;
use collocate_core::{Association, Sentence, WordEntropy};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output a single sentence
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()>;

    /// Output the sorted associations of one word
    fn format_word_report(&mut self, word: &str, report: &[Association]) -> Result<()>;

    /// Output one line of an entropy ranking
    fn format_entropy(&mut self, entry: &WordEntropy) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one record per line
    #[default]
    Text,
    /// A single JSON array of records
    Json,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W: Write + 'static>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
