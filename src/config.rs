//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an rst-outline.toml, and if present we load settings from there.
//! This provides file extension and output format preferences.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rst-outline.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from rst-outline.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["rst".to_string(), "rest".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "tree".to_string())]
    /// Output format name: `tree`, `json` or `tags`.
    pub format: String,
}

impl Config {
    /// Load configuration from rst-outline.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, using the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::parse("", path),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            path: PathBuf::from(path),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
