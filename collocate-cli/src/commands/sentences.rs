//! `sentences` command implementation

use super::CommonArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{create_formatter, OutputFormatter};
use anyhow::Result;
use clap::Args;
use collocate_core::{Segmenter, SegmenterConfig};
use std::io::{self, Read, Write};

/// Arguments for the sentences tool
#[derive(Debug, Default, Args)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Regular expression that marks a sentence break
    #[arg(short, long, value_name = "REGEX")]
    pub break_pattern: Option<String>,

    /// Sentences of at most this many characters are merged into the next
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Sentences of at most this many characters are reported on stderr (0 or below disables)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub warn_length: Option<i64>,

    /// Bytes read from the input at a time
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,
}

impl SentencesArgs {
    /// Execute the sentences tool
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.common.config.as_deref())?;
        let segmenter = Segmenter::new(self.segmenter_config(&config)).map_err(CliError::from)?;
        let source = InputSource::from_patterns(&self.common.input)?;

        let format = self.common.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, config.output.pretty_json, io::stdout());
        let count = write_sentences(
            &segmenter,
            source.stream()?,
            formatter.as_mut(),
            &mut io::stderr(),
        )?;
        formatter.finish()?;

        log::info!("Wrote {count} sentences");
        Ok(())
    }

    /// Command-line settings win over the config file
    pub fn segmenter_config(&self, config: &CliConfig) -> SegmenterConfig {
        let mut merged = config.sentences.clone();
        if let Some(pattern) = &self.break_pattern {
            merged.break_pattern = pattern.clone();
        }
        if let Some(min_length) = self.min_length {
            merged.min_length = min_length;
        }
        if let Some(warn_length) = self.warn_length {
            merged.warn_length = usize::try_from(warn_length).unwrap_or(0);
        }
        if let Some(chunk_size) = self.chunk_size {
            merged.chunk_size = chunk_size;
        }
        merged
    }
}

/// Segment `reader`, writing sentences to `formatter` and warnings to
/// `warnings` as each sentence is produced
pub fn write_sentences<R: Read, W: Write>(
    segmenter: &Segmenter,
    reader: R,
    formatter: &mut dyn OutputFormatter,
    warnings: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for sentence in segmenter.segment(reader) {
        let sentence = sentence.map_err(CliError::from)?;
        if let Some(warning) = sentence.warning() {
            writeln!(warnings, "{warning}")?;
        }
        formatter.format_sentence(&sentence)?;
        count += 1;
    }
    Ok(count)
}
