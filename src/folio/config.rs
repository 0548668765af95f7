//! # Configuration
//!
//! Folio configuration is managed by [`confique`], which handles layered loading
//! from environment variables, a TOML file and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line flags**: `--data-dir`, `--bind`, `--log-level`, applied by the binary.
//! 2. **Environment variables**: `FOLIO_BIND`, `FOLIO_DATA_DIR`, `FOLIO_LOG_LEVEL`, etc.
//! 3. **Config file**: `--config <FILE>`, else `folio.toml` in the OS config
//!    directory (via `directories` crate). A missing file is skipped.
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `server.bind` | `127.0.0.1:3000` | Address the HTTP server listens on |
//! | `server.graphql_path` | `/api/graphql` | Path of the GraphQL endpoint |
//! | `store.data_dir` | OS data dir | Directory holding `folio.json` |
//! | `search.case_sensitive` | `false` | Whether post search matches case |
//! | `log.level` | `info` | Default tracing filter (`RUST_LOG` wins) |
//! | `log.format` | `pretty` | `pretty` or `json` |

use crate::error::{FolioError, Result};
use crate::query::SearchMode;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "folio.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    #[config(nested)]
    pub server: ServerConfig,

    #[config(nested)]
    pub store: StoreConfig,

    #[config(nested)]
    pub search: SearchConfig,

    #[config(nested)]
    pub log: LogConfig,
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[config(env = "FOLIO_BIND", default = "127.0.0.1:3000")]
    pub bind: String,

    /// Path the GraphQL endpoint is mounted at.
    #[config(env = "FOLIO_GRAPHQL_PATH", default = "/api/graphql")]
    pub graphql_path: String,
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the data file. Defaults to the OS data directory.
    #[config(env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Match post search terms case-sensitively.
    #[config(env = "FOLIO_SEARCH_CASE_SENSITIVE", default = false)]
    pub case_sensitive: bool,
}

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter directive, e.g. "info" or "folio=debug".
    #[config(env = "FOLIO_LOG_LEVEL", default = "info")]
    pub level: String,

    /// Output format: "pretty" or "json".
    #[config(env = "FOLIO_LOG_FORMAT", default = "pretty")]
    pub format: String,
}

impl LogConfig {
    pub fn format(&self) -> Result<LogFormat> {
        self.format.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(FolioError::InvalidInput(format!(
                "unknown log format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

/// `folio.toml` in the OS config directory, if one can be determined.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// The OS data directory, falling back to `./.folio`.
pub fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".folio"))
}

impl FolioConfig {
    /// Load from environment, then `file` (or the default config file), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file.map(Path::to_path_buf).or_else(default_config_file) {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.store.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn search_mode(&self) -> SearchMode {
        SearchMode::from_case_sensitive(self.search.case_sensitive)
    }
}
