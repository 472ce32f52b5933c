//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use collocate_core::{Association, Sentence, WordEntropy};
use std::io::Write;

/// Plain text formatter - the classic line-oriented output
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        writeln!(self.writer, "{}", sentence.text())?;
        Ok(())
    }

    fn format_word_report(&mut self, word: &str, report: &[Association]) -> Result<()> {
        writeln!(self.writer, "{word}:")?;
        for association in report {
            writeln!(self.writer, "{association}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_entropy(&mut self, entry: &WordEntropy) -> Result<()> {
        writeln!(self.writer, "{entry}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collocate_core::{rank_by_entropy, report, AssociationBuilder, Segmenter};

    #[test]
    fn test_word_report_block() {
        let table = AssociationBuilder::with_max_skip(None).build(["the quick fox", "the lazy fox"]);
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_word_report("the", &report(&table, "the"))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            out,
            "the:\n        50% : fox\n        25% : lazy\n        25% : quick\n\n"
        );
    }

    #[test]
    fn test_entropy_lines() {
        let table = AssociationBuilder::with_max_skip(None).build(["a b c"]);
        let mut formatter = TextFormatter::new(Vec::new());
        for entry in rank_by_entropy(&table) {
            formatter.format_entropy(&entry).unwrap();
        }

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "0.693: a\n0.693: b\n0.693: c\n");
    }

    #[test]
    fn test_sentence_lines() {
        let segmenter = Segmenter::builder().build().unwrap();
        let mut formatter = TextFormatter::new(Vec::new());
        for sentence in segmenter.segment_str("One sentence here.\nTwo sentences now.").unwrap() {
            formatter.format_sentence(&sentence).unwrap();
        }

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "One sentence here.\nTwo sentences now.\n");
    }
}
