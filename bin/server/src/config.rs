//! Server configuration.
//!
//! Loaded via the `config` crate from `PARLEY_`-prefixed environment
//! variables, e.g. `PARLEY_SETTINGS_PATH=/var/lib/parley/config.json`.
//! Site address and asset paths come from the Leptos metadata in
//! `Cargo.toml` instead.

use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Where the theme settings file lives.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// Service key the conversation starts with.
    #[serde(default = "default_service")]
    pub default_service: String,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("config.json")
}

fn default_service() -> String {
    "echo".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            default_service: default_service(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("PARLEY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_local_file_and_echo() {
        let config = ServerConfig::default();
        assert_eq!(config.settings_path, PathBuf::from("config.json"));
        assert_eq!(config.default_service, "echo");
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let source = ServerConfig::environment().source(Some(HashMap::new()));
        let config = ServerConfig::from_source(source).expect("load");
        assert_eq!(config.settings_path, PathBuf::from("config.json"));
        assert_eq!(config.default_service, "echo");
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            (
                "PARLEY_SETTINGS_PATH".to_string(),
                "/tmp/parley.json".to_string(),
            ),
            ("PARLEY_DEFAULT_SERVICE".to_string(), "shout".to_string()),
        ]);
        let source = ServerConfig::environment().source(Some(vars));
        let config = ServerConfig::from_source(source).expect("load");
        assert_eq!(config.settings_path, PathBuf::from("/tmp/parley.json"));
        assert_eq!(config.default_service, "shout");
    }
}
