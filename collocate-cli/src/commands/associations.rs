//! `associations` command implementation

use super::CommonArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{create_formatter, OutputFormatter};
use anyhow::Result;
use clap::Args;
use collocate_core::{rank_by_entropy, report, AssociationBuilder, AssociationConfig, AssociationTable};
use std::io::{self, BufWriter};

/// Arguments for the associations tool
#[derive(Debug, Default, Args)]
pub struct AssociationsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rank words by entropy instead of listing their associations
    #[arg(short = 'e', long)]
    pub entropy: bool,

    /// Window length including the anchor word (0 = rest of the line)
    #[arg(long, value_name = "N")]
    pub max_skip: Option<usize>,
}

impl AssociationsArgs {
    /// Execute the associations tool
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.common.config.as_deref())?;
        let source = InputSource::from_patterns(&self.common.input)?;

        let mut builder = AssociationBuilder::new(self.association_config(&config));
        for reader in source.line_readers()? {
            builder.add_reader(reader).map_err(CliError::from)?;
        }
        let table = builder.finish();
        log::info!("Collected associations for {} words", table.len());

        let format = self.common.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(
            format,
            config.output.pretty_json,
            BufWriter::new(io::stdout()),
        );
        self.render(&table, formatter.as_mut())?;
        formatter.finish()
    }

    /// Command-line window length wins over the config file
    pub fn association_config(&self, config: &CliConfig) -> AssociationConfig {
        match self.max_skip {
            Some(max_skip) => AssociationConfig::bounded(max_skip),
            None => config.associations.clone(),
        }
    }

    /// Write the table in the selected mode
    pub fn render(&self, table: &AssociationTable, formatter: &mut dyn OutputFormatter) -> Result<()> {
        if self.entropy {
            for entry in rank_by_entropy(table) {
                formatter.format_entropy(&entry)?;
            }
        } else {
            for word in table.words() {
                formatter.format_word_report(word, &report(table, word))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TextFormatter;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: AssociationsArgs,
    }

    fn parse(argv: &[&str]) -> AssociationsArgs {
        let mut full = vec!["associations"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    fn render(args: &AssociationsArgs, lines: &[&str]) -> String {
        let config = CliConfig::default();
        let table = AssociationBuilder::new(args.association_config(&config))
            .build(lines.iter().copied());
        let mut formatter = TextFormatter::new(Vec::new());
        args.render(&table, &mut formatter).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_entropy_flag() {
        assert!(!parse(&[]).entropy);
        assert!(parse(&["-e"]).entropy);
        assert!(parse(&["--entropy"]).entropy);
    }

    #[test]
    fn test_max_skip_overrides_config() {
        let config = CliConfig::from_toml("[associations]\nmax_skip = 4\n").unwrap();
        assert_eq!(parse(&[]).association_config(&config).max_skip, Some(4));
        assert_eq!(
            parse(&["--max-skip", "2"]).association_config(&config).max_skip,
            Some(2)
        );
    }

    #[test]
    fn test_listing_mode_output() {
        let out = render(&parse(&[]), &["a b", "a c"]);
        assert_eq!(
            out,
            "a:\n        50% : b\n        50% : c\n\nb:\n       100% : a\n\nc:\n       100% : a\n\n"
        );
    }

    #[test]
    fn test_entropy_mode_output() {
        let out = render(&parse(&["-e"]), &["a b", "a c"]);
        assert_eq!(out, "0: b\n0: c\n0.693: a\n");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render(&parse(&[]), &[]), "");
        assert_eq!(render(&parse(&["-e"]), &["solo", ""]), "");
    }
}
