//! Drive configuration and environment resolution.
//!
//! The manifest builder is driven by two inputs:
//!
//! 1. **`config.json`** — the site's shared configuration file. The only key
//!    this tool reads is `drives`; everything else belongs to the website's
//!    client-side script and is ignored:
//!
//!    ```json
//!    {
//!      "drives": [
//!        { "id": "main", "name": "Main Songbook", "outputFile": "songs-main.json" },
//!        { "id": "holiday" }
//!      ]
//!    }
//!    ```
//!
//!    Entries are sparse: `name` defaults to `"Unknown"` and `outputFile`
//!    defaults to `songs-<id>.json`.
//!
//! 2. **Environment variables** — secrets and per-deployment wiring:
//!
//!    | Variable | Meaning |
//!    |----------|---------|
//!    | `SERVICE_ACCOUNT_JSON` | serialized Google service-account key (required) |
//!    | `CONFIG_PATH` | path to `config.json` (default `config.json`) |
//!    | `DRIVE_FOLDER_ID_<ID>` | Drive folder for the config entry `<id>`, uppercased |
//!    | `DRIVE_FOLDER_ID` | legacy single-folder mode trigger |
//!    | `OUTPUT_JSON_PATH` | legacy mode output path (default `songs.json`) |
//!
//! Folder ids live in the environment rather than `config.json` so the config
//! file can stay in the public repository without leaking which Drive folders
//! back the site.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default path for the shared site config file.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
/// Default output path in legacy single-folder mode.
pub const DEFAULT_OUTPUT_PATH: &str = "songs.json";

/// Env var holding the serialized service-account key.
pub const SERVICE_ACCOUNT_VAR: &str = "SERVICE_ACCOUNT_JSON";
/// Env var overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
/// Env var triggering legacy single-folder mode.
pub const LEGACY_FOLDER_VAR: &str = "DRIVE_FOLDER_ID";
/// Env var overriding the legacy mode output path.
pub const LEGACY_OUTPUT_VAR: &str = "OUTPUT_JSON_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No drives configured in {0}")]
    NoDrives(PathBuf),
}

/// The `drives` section of `config.json`.
///
/// Unknown top-level keys are deliberately tolerated — the file is shared
/// with the website's client-side script, which owns the rest of it.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub drives: Vec<DriveConfig>,
}

/// One drive entry: a remote folder mapped to one output manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Stable identifier; also selects the `DRIVE_FOLDER_ID_<ID>` env var.
    pub id: String,
    /// Human-readable label used only in progress output.
    #[serde(default = "default_drive_name")]
    pub name: String,
    /// Manifest path. Defaults to `songs-<id>.json` when omitted.
    #[serde(rename = "outputFile")]
    output_file: Option<String>,
}

fn default_drive_name() -> String {
    "Unknown".to_string()
}

impl DriveConfig {
    /// Manifest output path for this drive.
    pub fn output_file(&self) -> String {
        self.output_file
            .clone()
            .unwrap_or_else(|| format!("songs-{}.json", self.id))
    }

    /// Name of the environment variable holding this drive's folder id.
    pub fn folder_id_var(&self) -> String {
        format!("DRIVE_FOLDER_ID_{}", self.id.to_uppercase())
    }
}

/// Load and validate `config.json`.
///
/// Fatal if the file is missing, is not valid JSON, or configures no drives —
/// a run with nothing to do is a deployment mistake, not a success.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = serde_json::from_str(&content)?;
    if config.drives.is_empty() {
        return Err(ConfigError::NoDrives(path.to_path_buf()));
    }
    Ok(config)
}

/// Resolve the config file path from `CONFIG_PATH`, defaulting to `config.json`.
pub fn config_path(env: EnvLookup) -> PathBuf {
    env(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Environment lookup seam.
///
/// Production code passes [`real_env`]; tests substitute a closure over a map
/// so they never mutate process-global state.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read a variable from the process environment. Empty values count as unset,
/// matching how CI systems pass through undefined secrets.
pub fn real_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
