use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    /// The links file parsed, but its top-level value is not a list.
    #[error("Format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl WizardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WizardError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the top-level-shape failure raised by the loader.
    pub fn is_format(&self) -> bool {
        matches!(self, WizardError::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
