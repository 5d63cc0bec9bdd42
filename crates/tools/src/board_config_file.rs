//! Board configuration files in TOML or JSON, chosen by extension.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use boardgen::BoardConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => bail!("board config {} must end in .toml or .json", path.display()),
        }
    }
}

pub fn load(path: &Path) -> Result<BoardConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board config: {}", path.display()))?;
    let config: BoardConfig = match format {
        ConfigFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML board config: {}", path.display()))?,
        ConfigFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON board config: {}", path.display()))?,
    };
    config.validate().with_context(|| format!("Invalid board config: {}", path.display()))?;
    Ok(config)
}

/// Writes through a sibling temp file and renames it into place.
pub fn write_atomic(config: &BoardConfig, path: &Path) -> Result<()> {
    let format = ConfigFormat::from_path(path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    };
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move board config into {}", path.display()))?;
    Ok(())
}
