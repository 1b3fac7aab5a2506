//! Configuration loading errors.

/// What went wrong while assembling a configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged.
    #[display("Failed to load configuration from {}: {}", origin, reason)]
    Load {
        /// The file path or source description that failed
        origin: String,
        /// Underlying reader error
        reason: String,
    },

    /// The merged sources do not deserialize into the settings struct.
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),

    /// A setting parsed but holds an unusable value.
    #[display("Invalid setting '{}': {}", setting, reason)]
    Invalid {
        /// Setting name as written in the file
        setting: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use tabletop_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Load {
///     origin: "tabletop.toml".to_string(),
///     reason: "not found".to_string(),
/// });
/// assert!(err.to_string().contains("tabletop.toml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
