//! Shared configuration for the shelfly TUI.
//!
//! TOML file + `SHELFLY_`-prefixed environment variables, resolved
//! through figment with serialized defaults as the base layer. The
//! config file can point the app at a catalog JSON file and choose
//! the initial table layout; the binary's CLI flags override both.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path to the catalog JSON file. `None` means the built-in
    /// sample dataset.
    pub catalog: Option<PathBuf>,

    /// Initial table layout: "stacked" or "scroll". The runtime
    /// toggle never writes this back.
    #[serde(default = "default_layout")]
    pub layout: String,

    /// Log file path override.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            layout: default_layout(),
            log_file: None,
        }
    }
}

fn default_layout() -> String {
    "stacked".into()
}

impl Config {
    /// Validate field values that figment cannot check structurally.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.layout.as_str() {
            "stacked" | "scroll" => Ok(()),
            other => Err(ConfigError::Validation {
                field: "layout".into(),
                reason: format!("expected 'stacked' or 'scroll', got '{other}'"),
            }),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "shelfly", "shelfly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shelfly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &std::path::Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHELFLY_"))
}

/// Load the full config from file + environment, validated.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit file path (plus environment).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config: Config = figment_for(path).extract()?;
    config.validate()?;
    Ok(config)
}

/// Load config, falling back to defaults on any failure.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to an explicit path.
pub fn save_config_to(cfg: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string_pretty(cfg)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_sample_catalog_with_stacked_layout() {
        let cfg = Config::default();
        assert!(cfg.catalog.is_none());
        assert_eq!(cfg.layout, "stacked");
        assert!(cfg.log_file.is_none());
        cfg.validate().expect("defaults are valid");
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = \"scroll\"\ncatalog = \"/tmp/p.json\"\n")
            .expect("write");

        let cfg = load_config_from(&path).expect("loads");
        assert_eq!(cfg.layout, "scroll");
        assert_eq!(cfg.catalog.as_deref(), Some(std::path::Path::new("/tmp/p.json")));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config_from(&dir.path().join("nope.toml")).expect("defaults");
        assert_eq!(cfg.layout, "stacked");
    }

    #[test]
    fn unknown_layout_fails_validation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = \"grid\"\n").expect("write");

        let err = load_config_from(&path).expect_err("must fail");
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            catalog: Some(PathBuf::from("/data/products.json")),
            layout: "scroll".into(),
            log_file: None,
        };
        save_config_to(&cfg, &path).expect("saves");

        let loaded = load_config_from(&path).expect("loads");
        assert_eq!(loaded.layout, "scroll");
        assert_eq!(loaded.catalog, cfg.catalog);
    }
}
