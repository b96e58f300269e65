//! Configuration management for postfilter
//!
//! Settings are layered with figment: built-in defaults, then the user's and
//! the working directory's config files (TOML, JSON or YAML), then
//! `POSTFILTER_*` environment variables.

use serde::{Deserialize, Serialize};

mod core;
mod formats;

pub use self::core::PostfilterConfig;
pub use formats::{ConfigFormat, FileProvider};

use crate::model::Kind;

/// Typed view of the merged configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub filter: FilterSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Context statuses are evaluated in when none is given on the command line
    pub context: Kind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// List statuses that pass every filter too
    #[serde(default = "default_show_none")]
    pub show_none: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_show_none() -> bool {
    true
}

fn default_color() -> bool {
    true
}

/// Report format for filter decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}
