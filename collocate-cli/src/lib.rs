//! Collocate CLI library
//!
//! This library provides the `associations` and `sentences` command-line
//! tools built on `collocate-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
