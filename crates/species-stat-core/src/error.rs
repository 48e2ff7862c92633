//! Error types for species-stat operations.
//!
//! Only loading can fail. Once a [`Taxonomy`](crate::taxonomy::Taxonomy) exists,
//! aggregation and summarizing are total.

use thiserror::Error;

/// Result type for taxonomy loading.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Invalid taxonomy data. Fatal at startup: baseline percentages are undefined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Every choice frequency sums to zero.
    #[error("Invalid frequency data in choices: total frequency is zero")]
    ZeroTotalFrequency,
    /// Choice frequencies sum past `u64::MAX`.
    #[error("Invalid frequency data in choices: total frequency overflows")]
    FrequencyOverflow,
    /// A choice name appears more than once.
    #[error("Duplicate choice name: {0}")]
    DuplicateChoice(String),
    /// A category or choice has an empty name.
    #[error("Empty {0} name")]
    EmptyName(&'static str),
}

/// Errors reading a configuration or taxonomy definition file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error(transparent)]
    Taxonomy(#[from] ConfigurationError),
}

impl ConfigError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &std::path::Path, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigurationError::DuplicateChoice("wolf".into()).to_string(),
            "Duplicate choice name: wolf"
        );
        assert_eq!(
            ConfigurationError::EmptyName("choice").to_string(),
            "Empty choice name"
        );
    }

    #[test]
    fn taxonomy_error_converts_into_config_error() {
        let err: ConfigError = ConfigurationError::ZeroTotalFrequency.into();
        assert!(matches!(
            err,
            ConfigError::Taxonomy(ConfigurationError::ZeroTotalFrequency)
        ));
    }
}
