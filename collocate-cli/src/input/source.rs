//! Where the tools read their text from

use super::resolve_patterns;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Text input: standard input or a list of files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read standard input
    Stdin,
    /// Read the files in order
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Standard input when no patterns are given, otherwise every matching file
    pub fn from_patterns(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(InputSource::Stdin);
        }
        let files = resolve_patterns(patterns)?;
        log::info!("Reading {} input file(s)", files.len());
        Ok(InputSource::Files(files))
    }

    /// One line reader per input, so lines never span two files
    pub fn line_readers(&self) -> Result<Vec<Box<dyn BufRead>>> {
        match self {
            InputSource::Stdin => Ok(vec![Box::new(io::stdin().lock()) as Box<dyn BufRead>]),
            InputSource::Files(files) => files
                .iter()
                .map(|path| {
                    let file = open(path)?;
                    Ok(Box::new(BufReader::new(file)) as Box<dyn BufRead>)
                })
                .collect(),
        }
    }

    /// All inputs joined into one continuous byte stream
    pub fn stream(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Files(files) => {
                let mut stream: Box<dyn Read> = Box::new(io::empty());
                for path in files {
                    stream = Box::new(stream.chain(open(path)?));
                }
                Ok(stream)
            }
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
