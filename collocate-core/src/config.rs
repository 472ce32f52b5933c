//! Configuration types for both pipelines

use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Default sentence break pattern (a literal period)
pub const DEFAULT_BREAK_PATTERN: &str = r"\.";

/// Default size of each read from the input stream, in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Association counting configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssociationConfig {
    /// Window length, anchor included (None or 0 = rest of the line)
    pub max_skip: Option<usize>,
}

impl AssociationConfig {
    /// Create a configuration with a bounded window
    pub fn bounded(max_skip: usize) -> Self {
        Self {
            max_skip: Some(max_skip),
        }
    }

    /// Create a configuration that pairs every word with the rest of its line
    pub fn unbounded() -> Self {
        Self { max_skip: None }
    }

    /// Effective window length, with zero folded into "unbounded"
    pub fn window(&self) -> Option<usize> {
        self.max_skip.filter(|&n| n > 0)
    }
}

/// Sentence segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterConfig {
    /// Regular expression matching a sentence break
    pub break_pattern: String,
    /// Candidates with at most this many characters are merged into the next one
    pub min_length: usize,
    /// Sentences with at most this many characters raise a warning (0 or below disables)
    #[serde(deserialize_with = "non_negative_or_zero")]
    pub warn_length: usize,
    /// Bytes requested from the stream per read
    pub chunk_size: usize,
}

/// Read a signed length, mapping negative values to 0
fn non_negative_or_zero<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(usize::try_from(value).unwrap_or(0))
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            break_pattern: DEFAULT_BREAK_PATTERN.to_string(),
            min_length: 5,
            warn_length: 9,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SegmenterConfig {
    /// Whether short-sentence warnings are produced at all
    pub fn warnings_enabled(&self) -> bool {
        self.warn_length > 0
    }

    /// Check values that cannot be expressed through the types alone
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CoreError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.break_pattern.is_empty() {
            return Err(CoreError::InvalidConfig(
                "break_pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
