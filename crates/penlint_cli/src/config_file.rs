//! Configuration file loading.
//!
//! Supports `.penlint.jsonc` and `.penlint.json` (JSON with comments).

use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Result};
use penlint_core::LintConfig;
use tracing::debug;

const CONFIG_FILE_NAMES: &[&str] = &[".penlint.jsonc", ".penlint.json"];

/// Loads the config from an explicit path, or discovers one in the current
/// directory. Falls back to the default config when none exists.
pub fn load(explicit: Option<&Path>) -> Result<LintConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(),
    };

    let Some(path) = path else {
        debug!("no config file found, using defaults");
        return Ok(LintConfig::default());
    };

    debug!("loading config from {}", path.display());
    let content = fs::read_to_string(&path)
        .map_err(|e| miette!("failed to read {}: {e}", path.display()))?;
    parse(&content).map_err(|e| miette!("in {}: {e}", path.display()))
}

fn discover() -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

fn parse(content: &str) -> Result<LintConfig> {
    let value = jsonc_parser::parse_to_serde_value(content, &Default::default())
        .map_err(|e| miette!("invalid JSONC: {e}"))?
        .ok_or_else(|| miette!("config file is empty"))?;
    serde_json::from_value(value).map_err(|e| miette!("invalid config: {e}"))
}
