//! Streaming skip-gram association counting
//!
//! Lines are split on whitespace and every word is used once as the anchor of
//! a window that starts at it. The anchor is paired with every other word in
//! its window, and each pair is entered under both words so the table can be
//! queried from either end.

use crate::config::AssociationConfig;
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Window length of the original skip-gram tool when a bound is wanted
pub const DEFAULT_SKIP_SIZE: usize = 4;

/// Symmetric word-pair counts plus per-word anchor counts
///
/// For any two words `a` and `b`, `count(a, b) == count(b, a)`. Words are kept
/// in lexicographic order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationTable {
    pairs: BTreeMap<String, BTreeMap<String, u64>>,
    occurrences: BTreeMap<String, u64>,
}

impl AssociationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `word` and `other` were seen in a shared window
    pub fn count(&self, word: &str, other: &str) -> u64 {
        self.pairs
            .get(word)
            .and_then(|others| others.get(other))
            .copied()
            .unwrap_or(0)
    }

    /// All words associated with `word`, with their counts
    pub fn associations(&self, word: &str) -> Option<&BTreeMap<String, u64>> {
        self.pairs.get(word)
    }

    /// Sum of all association counts recorded under `word`
    pub fn total(&self, word: &str) -> u64 {
        self.pairs
            .get(word)
            .map(|others| others.values().sum())
            .unwrap_or(0)
    }

    /// Number of windows anchored at `word`
    pub fn occurrences(&self, word: &str) -> u64 {
        self.occurrences.get(word).copied().unwrap_or(0)
    }

    /// Words that have at least one association, in lexicographic order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Number of words with at least one association
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no association has been recorded
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Counts for `word`, inserting an empty entry on first touch
    fn entry(&mut self, word: &str) -> &mut BTreeMap<String, u64> {
        self.pairs.entry(word.to_string()).or_default()
    }

    fn record_pair(&mut self, anchor: &str, other: &str) {
        *self.entry(anchor).entry(other.to_string()).or_insert(0) += 1;
        *self.entry(other).entry(anchor.to_string()).or_insert(0) += 1;
    }

    fn record_anchor(&mut self, anchor: &str) {
        *self.occurrences.entry(anchor.to_string()).or_insert(0) += 1;
    }

    /// Slide the window over one line
    fn ingest_line(&mut self, line: &str, window: Option<usize>) {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() < 2 {
            return;
        }

        // The last word never anchors a window of its own
        for i in 0..words.len() - 1 {
            let end = match window {
                Some(len) => i.saturating_add(len).min(words.len()),
                None => words.len(),
            };
            let anchor = words[i];

            self.record_anchor(anchor);
            for other in &words[i + 1..end] {
                self.record_pair(anchor, other);
            }
        }
    }
}

/// Builds an [`AssociationTable`] one line at a time
#[derive(Debug, Default)]
pub struct AssociationBuilder {
    config: AssociationConfig,
    table: AssociationTable,
    lines_seen: usize,
}

impl AssociationBuilder {
    /// Create a builder from a configuration
    pub fn new(config: AssociationConfig) -> Self {
        Self {
            config,
            table: AssociationTable::new(),
            lines_seen: 0,
        }
    }

    /// Create a builder with the given window length (None or 0 = unbounded)
    pub fn with_max_skip(max_skip: Option<usize>) -> Self {
        Self::new(AssociationConfig { max_skip })
    }

    /// Feed a single line
    pub fn add_line(&mut self, line: &str) {
        self.table.ingest_line(line, self.config.window());
        self.lines_seen += 1;
    }

    /// Number of lines fed so far
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Finish construction and hand out the table
    pub fn finish(self) -> AssociationTable {
        log::debug!(
            "Association table complete: {} lines, {} words",
            self.lines_seen,
            self.table.len()
        );
        self.table
    }

    /// Consume every line of an in-memory sequence
    pub fn build<I, S>(mut self, lines: I) -> AssociationTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add_line(line.as_ref());
        }
        self.finish()
    }

    /// Feed every line of a reader
    ///
    /// Read failures, including invalid UTF-8, are returned as errors. Lines
    /// from separate readers never share a window.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.add_line(&line);
            if self.lines_seen % 100_000 == 0 {
                log::trace!("Ingested {} lines", self.lines_seen);
            }
        }
        Ok(())
    }

    /// Consume every line of a reader
    pub fn build_from_reader<R: BufRead>(mut self, reader: R) -> Result<AssociationTable> {
        self.add_reader(reader)?;
        Ok(self.finish())
    }
}
