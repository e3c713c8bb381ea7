//! Runtime configuration for the `urlize` CLI.
//!
//! Resolution order: **env var > `~/.urlize/config` file > hardcoded default**.
//! Command-line flags override whatever is loaded here.
//!
//! ```text
//! Field         Env Var               Config Key     Default
//! ───────────── ───────────────────── ────────────── ─────────
//! urlize_dir    URLIZE_DIR            —              ~/.urlize
//! null_marker   URLIZE_NULL_MARKER    null_marker    \N
//! json          URLIZE_JSON           json           false
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Line that stands for an absent value in batch input (PostgreSQL `COPY` text format).
pub const DEFAULT_NULL_MARKER: &str = "\\N";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory holding the optional `config` file.
    pub urlize_dir: PathBuf,
    /// Batch input line treated as an absent value (`URLIZE_NULL_MARKER`).
    pub null_marker: String,
    /// Emit JSON records instead of bare slugs (`URLIZE_JSON`).
    pub json: bool,
}

impl Config {
    /// Load config from env vars, the config file, and defaults.
    pub fn load() -> Result<Self> {
        Self::load_with_env(|k| env::var(k).ok())
    }

    fn load_with_env(get_env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let urlize_dir = resolve_urlize_dir(&get_env);
        let mut cfg = Self::defaults(&urlize_dir);

        let config_file = urlize_dir.join("config");
        if config_file.exists() {
            log::debug!("reading config from {}", config_file.display());
            parse_config_file(&config_file, |key, value| cfg.apply_file_entry(key, value))
                .with_context(|| format!("failed to read {}", config_file.display()))?;
        }

        cfg.apply_env_overrides(get_env);
        Ok(cfg)
    }

    fn defaults(urlize_dir: &Path) -> Self {
        Self {
            urlize_dir: urlize_dir.to_path_buf(),
            null_marker: DEFAULT_NULL_MARKER.to_string(),
            json: false,
        }
    }

    fn apply_file_entry(&mut self, key: &str, value: &str) {
        match key {
            "null_marker" => self.null_marker = value.to_string(),
            "json" => {
                if let Some(b) = parse_bool(value) {
                    self.json = b;
                }
            }
            other => log::warn!("ignoring unknown config key `{other}`"),
        }
    }

    fn apply_env_overrides(&mut self, get_env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get_env("URLIZE_NULL_MARKER") {
            self.null_marker = v;
        }
        if let Some(v) = get_env("URLIZE_JSON") {
            if let Some(b) = parse_bool(&v) {
                self.json = b;
            }
        }
    }
}

fn resolve_urlize_dir(get_env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = get_env("URLIZE_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = get_env("HOME") {
        return PathBuf::from(home).join(".urlize");
    }
    PathBuf::from(".urlize")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a `key=value` config file, calling `f` for each entry.
///
/// Lines starting with `#` and empty lines are skipped.
fn parse_config_file(path: &Path, mut f: impl FnMut(&str, &str)) -> Result<()> {
    let content = fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            f(k.trim(), v.trim());
        }
    }
    Ok(())
}
