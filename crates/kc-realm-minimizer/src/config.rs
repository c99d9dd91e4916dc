//! Minimizer settings.
//!
//! Settings come from an optional TOML file named with `--config` (or
//! `KC_MINIMIZER_CONFIG`); command-line flags win over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{MinimizerError, MinimizerResult};

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Minimizer settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Tracing filter (e.g. `info`, `kc_realm_minimizer=debug`).
    #[serde(default)]
    pub log_level: Option<String>,

    /// Colored diagnostics.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            color: true,
        }
    }
}

impl CliConfig {
    /// Loads settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> MinimizerResult<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| MinimizerError::Config(format!("{}: {e}", path.display())))?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> MinimizerResult<Self> {
        toml::from_str(content)
            .map_err(|e| MinimizerError::Config(format!("failed to parse config: {e}")))
    }

    /// Picks the log filter: explicit flag, then settings file, then verbosity.
    #[must_use]
    pub fn effective_log_filter(&self, arg_filter: Option<&str>, verbose: bool) -> String {
        arg_filter
            .map(str::to_string)
            .or_else(|| self.log_level.clone())
            .unwrap_or_else(|| {
                if verbose {
                    VERBOSE_LOG_FILTER.to_string()
                } else {
                    DEFAULT_LOG_FILTER.to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn parses_settings() {
        let config = CliConfig::from_toml("log_level = \"info\"\ncolor = false\n").unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(!config.color);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CliConfig::from_toml("exclude_clients = [\"web\"]").unwrap_err();
        assert!(matches!(err, MinimizerError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/minimizer.toml"))).unwrap_err();
        assert!(matches!(err, MinimizerError::Config(_)));
    }

    #[test]
    fn log_filter_precedence() {
        let config = CliConfig {
            log_level: Some("info".to_string()),
            color: true,
        };
        assert_eq!(config.effective_log_filter(Some("trace"), false), "trace");
        assert_eq!(config.effective_log_filter(None, true), "info");

        let config = CliConfig::default();
        assert_eq!(config.effective_log_filter(None, true), "debug");
        assert_eq!(config.effective_log_filter(None, false), "warn");
    }
}
