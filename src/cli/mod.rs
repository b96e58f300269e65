//! Command-line interface for postfilter
//!
//! Argument parsing uses clap; human output goes through [`Output`].

pub mod commands;
mod output;

pub use commands::Cli;
pub use output::Output;
