use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_HOST, DEFAULT_LINKS_FILE, DEFAULT_LOG_DIR, DEFAULT_PORT, ENV_HOST,
    ENV_LINKS_FILE, ENV_LOG_DIR, ENV_PORT,
};
use crate::error::{Result, WizardError};

/// Runtime settings. Layered as defaults, then the optional TOML file, then
/// environment variables; the CLI applies its own flags last.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub links_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from(DEFAULT_LINKS_FILE),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    /// Write JSON logs to a daily rolling file in `directory`.
    pub file_logs: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file_logs: true,
        }
    }
}

impl AppConfig {
    /// Load configuration for the running process.
    ///
    /// An explicit `path` must exist. Without one, `wizardwebb.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenv::dotenv();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WizardError::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `LINKS_FILE`, `HOST`, `PORT` and `WIZARDWEBB_LOG_DIR` overrides.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(links_file) = lookup(ENV_LINKS_FILE).filter(|v| !v.is_empty()) {
            self.catalog.links_file = PathBuf::from(links_file);
        }
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| WizardError::Config(format!("invalid {} value '{}'", ENV_PORT, port)))?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.is_empty()) {
            self.logging.directory = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_bundled_layout() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.links_file, PathBuf::from("data/links.yml"));
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.logging.file_logs);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config =
            AppConfig::from_toml("[catalog]\nlinks_file = \"from_file.yml\"\n").unwrap();
        config
            .apply_env(env_of(&[("LINKS_FILE", "/srv/links.yml"), ("PORT", "8123")]))
            .unwrap();
        assert_eq!(config.catalog.links_file, PathBuf::from("/srv/links.yml"));
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env_of(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            AppConfig::from_toml("[server\nport = 1").unwrap_err(),
            WizardError::Toml(_)
        ));
    }
}
