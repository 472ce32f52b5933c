//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use collocate_core::{Association, Sentence, WordEntropy};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects records and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

/// One element of the JSON output array
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// A segmented sentence
    Sentence {
        /// Normalized sentence text
        text: String,
        /// Short-sentence warning, if one was raised
        warning: Option<String>,
    },
    /// The associations of one word
    WordReport {
        /// The reported word
        word: String,
        /// Associations, most frequent first
        associations: Vec<Association>,
    },
    /// One entry of an entropy ranking
    Entropy(WordEntropy),
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        self.records.push(Record::Sentence {
            text: sentence.text().to_string(),
            warning: sentence.warning().map(ToString::to_string),
        });
        Ok(())
    }

    fn format_word_report(&mut self, word: &str, report: &[Association]) -> Result<()> {
        self.records.push(Record::WordReport {
            word: word.to_string(),
            associations: report.to_vec(),
        });
        Ok(())
    }

    fn format_entropy(&mut self, entry: &WordEntropy) -> Result<()> {
        self.records.push(Record::Entropy(entry.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
