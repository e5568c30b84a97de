use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Calendari configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendariConfig {
    /// Calendar year shown and used for invites.
    #[serde(default = "default_year")]
    pub year: i32,

    /// Annotation tables file; built-in tables when absent.
    #[serde(default)]
    pub tables: Option<PathBuf>,

    /// Invite settings.
    #[serde(default)]
    pub invite: InviteToml,
}

impl Default for CalendariConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            tables: None,
            invite: InviteToml::default(),
        }
    }
}

fn default_year() -> i32 {
    2025
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InviteToml {
    #[serde(default = "default_prodid")]
    pub prodid: String,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for InviteToml {
    fn default() -> Self {
        Self {
            prodid: default_prodid(),
            uid_domain: default_uid_domain(),
            description: default_description(),
            start: None,
            end: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_prodid() -> String {
    calendari_invite::DEFAULT_PRODID.to_string()
}
fn default_uid_domain() -> String {
    calendari_invite::DEFAULT_UID_DOMAIN.to_string()
}
fn default_description() -> String {
    calendari_invite::DEFAULT_DESCRIPTION.to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "calendari.toml";

/// Loads the configuration.
///
/// With an explicit `path` the file must exist. Without one,
/// [`DEFAULT_CONFIG_PATH`] is read if present and the defaults apply
/// otherwise. A relative `tables` path is resolved against the config
/// file's directory.
pub fn load(path: Option<&Path>) -> Result<CalendariConfig> {
    load_or_default(path, Path::new(DEFAULT_CONFIG_PATH))
}

fn load_or_default(path: Option<&Path>, default_path: &Path) -> Result<CalendariConfig> {
    match path {
        Some(path) => load_file(path),
        None if default_path.exists() => load_file(default_path),
        None => {
            debug!(path = %default_path.display(), "no config file, using defaults");
            Ok(CalendariConfig::default())
        }
    }
}

fn load_file(path: &Path) -> Result<CalendariConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let mut config: CalendariConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    if let (Some(tables), Some(dir)) = (config.tables.as_mut(), path.parent()) {
        if tables.is_relative() {
            *tables = dir.join(&*tables);
        }
    }
    debug!(path = %path.display(), year = config.year, "config loaded");
    Ok(config)
}
