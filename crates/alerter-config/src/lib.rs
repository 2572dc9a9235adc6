//! # Alerter Config
//!
//! Runtime configuration for College Alerter, loaded from environment
//! variables (a `.env` file is read by the binary before this runs).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ALERTER_DEMO_USERS` | `true` | Register the demo accounts at startup |
//! | `ALERTER_CLEAR_SCREEN` | `true` | Clear the terminal between screens |
//! | `LOG_LEVEL` | `warn` | Default tracing level |
//! | `LOG_DIR` | unset | Write logs to a file in this directory instead of stderr |
//!
//! # Example
//!
//! ```ignore
//! use alerter_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! ```

use std::path::PathBuf;

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed the demo student, teacher and staff accounts.
    pub demo_users: bool,
    /// Clear the terminal before each screen.
    pub clear_screen: bool,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo_users: true,
            clear_screen: true,
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` from environment variables.
    ///
    /// Falls back to default values if variables are not set or cannot be
    /// parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            demo_users: lookup("ALERTER_DEMO_USERS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.demo_users),
            clear_screen: lookup("ALERTER_CLEAR_SCREEN")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.clear_screen),
            log_level: lookup("LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("ALERTER_DEMO_USERS", "false"),
            ("ALERTER_CLEAR_SCREEN", "0"),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/tmp/alerter"),
        ]);

        assert!(!config.demo_users);
        assert!(!config.clear_screen);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/alerter")));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[("ALERTER_DEMO_USERS", "maybe"), ("LOG_LEVEL", "  ")]);

        assert!(config.demo_users);
        assert_eq!(config.log_level, "warn");
    }
}
