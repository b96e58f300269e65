use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use super::formats::{ConfigFormat, FileProvider};
use super::Settings;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "POSTFILTER_";

/// Layered configuration.
///
/// Priority, lowest first: embedded defaults, user config, repository config
/// (or only the custom file when one is given), environment variables.
#[derive(Debug, Clone)]
pub struct PostfilterConfig {
    figment: Figment,
}

impl PostfilterConfig {
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        Self::load_with_env_prefix(custom_config, ENV_PREFIX)
    }

    pub(crate) fn load_with_env_prefix(custom_config: Option<&str>, env_prefix: &str) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            let path = PathBuf::from(custom_path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(FileProvider::new(path));
        } else {
            for path in Self::user_config_paths()
                .into_iter()
                .chain(Self::repo_config_paths())
            {
                figment = figment.merge(FileProvider::new(path));
            }
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed(env_prefix).split("__"));

        tracing::trace!("Configuration layers: {:?}", figment.metadata().map(|m| &m.name).collect::<Vec<_>>());

        let config = PostfilterConfig { figment };
        // Fail early on values the typed view cannot hold
        config.settings()?;
        Ok(config)
    }

    /// Typed view of the merged configuration
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .context("Invalid postfilter configuration")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        self.get(path)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool> {
        self.get(path)
    }

    pub fn get_string(&self, path: &str) -> Result<String> {
        self.get(path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.figment
            .extract_inner(path)
            .with_context(|| format!("Failed to read configuration key '{}'", path))
    }

    fn user_config_paths() -> Vec<PathBuf> {
        let base = match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".config/postfilter/config"),
            Err(_) => PathBuf::from("~/.config/postfilter/config"),
        };
        Self::with_extensions(base)
    }

    fn repo_config_paths() -> Vec<PathBuf> {
        Self::with_extensions(PathBuf::from("postfilter"))
    }

    fn with_extensions(base: PathBuf) -> Vec<PathBuf> {
        [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml]
            .into_iter()
            .flat_map(|format| format.extensions().iter())
            .map(|ext| base.with_extension(ext))
            .collect()
    }
}
