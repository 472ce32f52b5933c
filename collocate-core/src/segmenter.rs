//! Buffered sentence segmentation over a chunked character stream
//!
//! The stream is read in fixed-size chunks. Each chunk is appended to the
//! text left over from the previous one and scanned for matches of the break
//! pattern. A candidate sentence runs from the scan offset up to and
//! including the character that follows a match. Candidates that are too
//! short are not emitted on their own: they are carried forward and glued to
//! the front of the next candidate. Once a short read signals the end of the
//! stream, whatever text is left becomes the final sentence.
//!
//! Every literal match is a candidate boundary. The abbreviation list in
//! [`NON_BREAKING_ABBREVIATIONS`] is not consulted.

use crate::config::SegmenterConfig;
use crate::error::{CoreError, Result};
use regex::Regex;
use std::collections::VecDeque;
use std::fmt;
use std::io::Read;
use std::iter::FusedIterator;

/// Periods that do not end a sentence in ordinary English prose
///
/// Kept as reference data only. The segmenter breaks on every match of its
/// pattern, including the periods inside these abbreviations.
pub const NON_BREAKING_ABBREVIATIONS: &[&str] = &[
    "a.m.", "p.m.", "A.M.", "P.M.", "Mr.", "Mrs.", "Ms.", "B.Sc.", "B.A.", "Ph.D.", "U.S.A.",
];

/// Notice about a suspiciously short sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    fragment: String,
}

impl Warning {
    fn new(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
        }
    }

    /// The raw text that triggered the warning, before normalization
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W: '{}'", self.fragment)
    }
}

/// A finished sentence
///
/// Carriage returns are removed, newlines become spaces and surrounding
/// whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    warning: Option<Warning>,
}

impl Sentence {
    fn new(raw: &str, warning: Option<Warning>) -> Self {
        Self {
            text: normalize(raw),
            warning,
        }
    }

    /// The normalized sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The short-sentence warning raised when this sentence was closed
    pub fn warning(&self) -> Option<&Warning> {
        self.warning.as_ref()
    }

    /// Take the text, dropping any warning
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn normalize(raw: &str) -> String {
    raw.replace('\r', "").replace('\n', " ").trim().to_string()
}

/// Byte index just past the character that starts at `pos`, or the end of
/// `text` when `pos` is already there
fn after_next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

/// Sentence segmenter with a compiled break pattern
///
/// A segmenter is reusable; each call to [`Segmenter::segment`] starts an
/// independent pass over a new stream.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    pattern: Regex,
}

impl Segmenter {
    /// Create a segmenter, compiling the configured break pattern
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        let pattern = Regex::new(&config.break_pattern)?;
        Ok(Self { config, pattern })
    }

    /// Start building a segmenter from the default configuration
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Lazily split the text read from `reader` into sentences
    pub fn segment<R: Read>(&self, reader: R) -> Sentences<R> {
        Sentences::new(self.clone(), reader)
    }

    /// Split an in-memory string into sentences
    pub fn segment_str(&self, text: &str) -> Result<Vec<Sentence>> {
        self.segment(text.as_bytes()).collect()
    }

    /// Scan one buffer, queueing every closed sentence
    ///
    /// Returns the text that must be carried into the next buffer: a pending
    /// short prefix followed by the unmatched tail.
    fn scan(&self, buffer: &str, out: &mut VecDeque<Sentence>) -> String {
        let mut offset = 0;
        let mut prefix = String::new();

        while offset < buffer.len() {
            let Some(found) = self.pattern.find_at(buffer, offset) else {
                break;
            };
            let end = after_next_char(buffer, found.end());

            let mut candidate = std::mem::take(&mut prefix);
            candidate.push_str(&buffer[offset..end]);
            offset = end;

            let length = candidate.chars().count();
            if length <= self.config.min_length {
                prefix = candidate;
                continue;
            }

            let warning = (self.config.warnings_enabled() && length <= self.config.warn_length)
                .then(|| Warning::new(&candidate));
            out.push_back(Sentence::new(&candidate, warning));
        }

        prefix.push_str(&buffer[offset..]);
        prefix
    }

    /// Close the final leftover once the stream has ended
    fn drain(&self, leftover: &str) -> Option<Sentence> {
        if leftover.trim().is_empty() {
            return None;
        }

        let length = leftover.chars().count();
        let config = &self.config;
        let warning = (config.warnings_enabled()
            && length < config.warn_length
            && config.warn_length >= config.min_length)
            .then(|| Warning::new(leftover));
        Some(Sentence::new(leftover, warning))
    }
}

/// Fluent builder for [`Segmenter`]
#[derive(Debug, Default)]
pub struct SegmenterBuilder {
    config: SegmenterConfig,
}

impl SegmenterBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: SegmenterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the regular expression that marks a sentence break
    pub fn break_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.config.break_pattern = pattern.into();
        self
    }

    /// Set the length at or below which candidates are merged forward
    pub fn min_length(mut self, length: usize) -> Self {
        self.config.min_length = length;
        self
    }

    /// Set the length at or below which sentences are flagged (0 disables)
    pub fn warn_length(mut self, length: usize) -> Self {
        self.config.warn_length = length;
        self
    }

    /// Set the number of bytes requested per read
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter> {
        Segmenter::new(self.config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// More input may follow
    Reading,
    /// The last chunk has been read; only the leftover remains
    Draining,
    /// Nothing more will be produced
    Exhausted,
}

/// Lazy, single-pass sequence of sentences read from a stream
///
/// Sentences closed by one chunk are queued and handed out one at a time; the
/// next chunk is read only once the queue is empty. After the end of the
/// stream, or after the first error, the iterator only returns `None`.
pub struct Sentences<R> {
    segmenter: Segmenter,
    reader: R,
    phase: Phase,
    leftover: String,
    /// Bytes of a UTF-8 sequence split by the chunk boundary
    partial: Vec<u8>,
    decoded: usize,
    queue: VecDeque<Sentence>,
}

impl<R> fmt::Debug for Sentences<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentences")
            .field("phase", &self.phase)
            .field("leftover", &self.leftover)
            .field("decoded", &self.decoded)
            .field("queued", &self.queue.len())
            .finish()
    }
}

impl<R: Read> Sentences<R> {
    fn new(segmenter: Segmenter, reader: R) -> Self {
        Self {
            segmenter,
            reader,
            phase: Phase::Reading,
            leftover: String::new(),
            partial: Vec::new(),
            decoded: 0,
            queue: VecDeque::new(),
        }
    }

    /// Read up to one chunk and decode it, holding back an incomplete
    /// trailing character
    fn read_chunk(&mut self) -> Result<String> {
        let chunk_size = self.segmenter.config.chunk_size;
        let mut bytes = std::mem::take(&mut self.partial);

        let read = Read::by_ref(&mut self.reader)
            .take(chunk_size as u64)
            .read_to_end(&mut bytes)?;
        if read < chunk_size {
            self.phase = Phase::Draining;
        }
        log::trace!("Read {read} bytes (chunk size {chunk_size})");

        let invalid = std::str::from_utf8(&bytes).err();
        if let Some(e) = invalid {
            if e.error_len().is_some() || self.phase == Phase::Draining {
                return Err(CoreError::Encoding {
                    position: self.decoded + e.valid_up_to(),
                });
            }
            self.partial = bytes.split_off(e.valid_up_to());
        }

        let decoded = self.decoded;
        let text = String::from_utf8(bytes).map_err(|e| CoreError::Encoding {
            position: decoded + e.utf8_error().valid_up_to(),
        })?;
        self.decoded += text.len();
        Ok(text)
    }

    /// Read and scan one chunk, finishing the stream if it was the last
    fn advance(&mut self) -> Result<()> {
        let text = self.read_chunk()?;

        let mut buffer = std::mem::take(&mut self.leftover);
        buffer.push_str(&text);
        self.leftover = self.segmenter.scan(&buffer, &mut self.queue);

        if self.phase == Phase::Draining {
            let leftover = std::mem::take(&mut self.leftover);
            if let Some(sentence) = self.segmenter.drain(&leftover) {
                self.queue.push_back(sentence);
            }
            self.phase = Phase::Exhausted;
            log::debug!("Stream exhausted after {} bytes", self.decoded);
        }
        Ok(())
    }
}

impl<R: Read> Iterator for Sentences<R> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(sentence) = self.queue.pop_front() {
                return Some(Ok(sentence));
            }
            if self.phase == Phase::Exhausted {
                return None;
            }
            if let Err(e) = self.advance() {
                self.phase = Phase::Exhausted;
                self.queue.clear();
                return Some(Err(e));
            }
        }
    }
}

impl<R: Read> FusedIterator for Sentences<R> {}
