//! JSON file loading

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and decode a JSON document, naming the file in any error
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in: {}", path.display()))
}
