//! Environment Configuration
//!
//! Every setting is read from a `GARDEN_*` environment variable with a
//! default. Values that are present but unparseable are rejected instead of
//! silently falling back.
//!
//! | Variable                    | Default   |
//! |-----------------------------|-----------|
//! | `GARDEN_VAULT_PATH`         | `./vault` |
//! | `GARDEN_INDEX_PATH`         | unset     |
//! | `GARDEN_PORT`               | `3000`    |
//! | `GARDEN_READ_TIMEOUT_MS`    | `5000`    |
//! | `GARDEN_PREVIEW_CHARS`      | `200`     |
//! | `GARDEN_MAX_EMBED_DEPTH`    | `0`       |
//! | `GARDEN_NOTE_HIGHLIGHTS`    | `style`   |
//! | `GARDEN_CANVAS_HIGHLIGHTS`  | `attribute` |

use crate::render::RenderOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_VAULT_PATH: &str = "./vault";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(var: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            var,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GardenConfig {
    /// Root directory of the vault
    pub vault_path: PathBuf,
    /// Page index snapshot; without one publish state lives in memory only
    pub index_path: Option<PathBuf>,
    pub port: u16,
    /// Upper bound for a single vault file read
    pub read_timeout: Duration,
    pub render: RenderOptions,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            vault_path: PathBuf::from(DEFAULT_VAULT_PATH),
            index_path: None,
            port: DEFAULT_PORT,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            render: RenderOptions::default(),
        }
    }
}

impl GardenConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value if set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let preview_chars = parse_or(
            "GARDEN_PREVIEW_CHARS",
            get("GARDEN_PREVIEW_CHARS"),
            defaults.render.preview_chars,
        )?;
        if preview_chars == 0 {
            return Err(ConfigError::invalid_value(
                "GARDEN_PREVIEW_CHARS",
                "0",
                "must be at least 1",
            ));
        }

        let read_timeout_ms = parse_or(
            "GARDEN_READ_TIMEOUT_MS",
            get("GARDEN_READ_TIMEOUT_MS"),
            DEFAULT_READ_TIMEOUT_MS,
        )?;

        let render = RenderOptions {
            note_highlights: parse_or(
                "GARDEN_NOTE_HIGHLIGHTS",
                get("GARDEN_NOTE_HIGHLIGHTS"),
                defaults.render.note_highlights,
            )?,
            canvas_highlights: parse_or(
                "GARDEN_CANVAS_HIGHLIGHTS",
                get("GARDEN_CANVAS_HIGHLIGHTS"),
                defaults.render.canvas_highlights,
            )?,
            preview_chars,
            max_embed_depth: parse_or(
                "GARDEN_MAX_EMBED_DEPTH",
                get("GARDEN_MAX_EMBED_DEPTH"),
                defaults.render.max_embed_depth,
            )?,
        };

        Ok(Self {
            vault_path: get("GARDEN_VAULT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.vault_path),
            index_path: get("GARDEN_INDEX_PATH").map(PathBuf::from),
            port: parse_or("GARDEN_PORT", get("GARDEN_PORT"), defaults.port)?,
            read_timeout: Duration::from_millis(read_timeout_ms),
            render,
        })
    }
}

fn parse_or<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid_value(var, value.clone(), e.to_string())),
    }
}
