//! Configuration to acknowledge course preferences as well as set defaults.
//!
//! Specifically, we try to find an nblint.toml, and if present we load settings from there.
//! This provides the minimum schema version, message snippet widths, and checks to skip.

use crate::checks::Check;
use clap::ValueEnum;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "nblint.toml";

const DEFAULT_MIN_NBFORMAT: u64 = 4;
const DEFAULT_SNIPPET_WIDTH: usize = 20;
const DEFAULT_PREVIEW_WIDTH: usize = 10;

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Lint preferences loaded from nblint.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_MIN_NBFORMAT)]
    /// Lowest accepted `nbformat` major version.
    pub min_nbformat: u64,
    #[facet(default = DEFAULT_SNIPPET_WIDTH)]
    /// Longest first line quoted verbatim when reporting adjacent code cells.
    pub snippet_width: usize,
    #[facet(default = DEFAULT_PREVIEW_WIDTH)]
    /// Characters of an unpunctuated description quoted in its violation.
    pub preview_width: usize,
    #[facet(default = Vec::new())]
    /// Names of checks that should not run, for example `header-nesting`.
    pub skip: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap_or_else(|_| Self {
            min_nbformat: DEFAULT_MIN_NBFORMAT,
            snippet_width: DEFAULT_SNIPPET_WIDTH,
            preview_width: DEFAULT_PREVIEW_WIDTH,
            skip: Vec::new(),
        })
    }
}

impl Config {
    #[must_use]
    /// Load configuration from nblint.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => {
                for name in config.unknown_skips() {
                    log::warn!("ignoring unknown check `{name}` in {}", path.display());
                }
                config
            }
            Err(_) => {
                log::warn!("ignoring malformed config at {}", path.display());
                Self::default()
            }
        }
    }

    #[must_use]
    /// Whether `check` is listed in `skip`.
    pub fn skips(&self, check: Check) -> bool {
        self.skip
            .iter()
            .filter_map(|name| Check::from_str(name, true).ok())
            .any(|skipped| skipped == check)
    }

    #[must_use]
    /// Entries of `skip` that do not name any check.
    pub fn unknown_skips(&self) -> Vec<&str> {
        self.skip
            .iter()
            .map(String::as_str)
            .filter(|name| Check::from_str(name, true).is_err())
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
