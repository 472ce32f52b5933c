//! Sentence splitter
//!
//! Reads raw text (stdin by default) and writes one sentence per line.
//! Suspiciously short sentences are reported on stderr as they are found.

use clap::Parser;
use collocate_cli::commands::SentencesArgs;

/// Split text into sentences, one per line
#[derive(Debug, Parser)]
#[command(name = "sentences", version)]
struct Cli {
    #[command(flatten)]
    args: SentencesArgs,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().args.execute()
}
