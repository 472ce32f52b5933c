//! Word association report
//!
//! Reads lines of text (stdin by default) and, for every word, lists the words
//! it shares a line with as percentages of its total associations. With `-e`,
//! ranks every word by the entropy of those associations instead.

use clap::Parser;
use collocate_cli::commands::AssociationsArgs;

/// Report skip-gram word associations, or rank words by entropy
#[derive(Debug, Parser)]
#[command(name = "associations", version)]
struct Cli {
    #[command(flatten)]
    args: AssociationsArgs,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().args.execute()
}
