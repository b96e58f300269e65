use figment::providers::{Format, Json, Toml, Yaml};
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};
use std::path::Path;

/// Configuration file formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format for `path`; unknown or missing extensions are read as TOML
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => ConfigFormat::Json,
            "yaml" | "yml" => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Json => &["json"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

/// Provider for a config file in whichever format its extension names.
/// A missing file provides nothing.
pub enum FileProvider {
    Toml(figment::providers::Data<Toml>),
    Json(figment::providers::Data<Json>),
    Yaml(figment::providers::Data<Yaml>),
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => FileProvider::Toml(Toml::file(path)),
            ConfigFormat::Json => FileProvider::Json(Json::file(path)),
            ConfigFormat::Yaml => FileProvider::Yaml(Yaml::file(path)),
        }
    }
}

impl Provider for FileProvider {
    fn metadata(&self) -> Metadata {
        match self {
            FileProvider::Toml(p) => p.metadata(),
            FileProvider::Json(p) => p.metadata(),
            FileProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        match self {
            FileProvider::Toml(p) => p.data(),
            FileProvider::Json(p) => p.data(),
            FileProvider::Yaml(p) => p.data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("postfilter.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Toml);
    }
}
