//! Top-level error wrapper types.

use crate::{ConfigError, EntityError, JsonError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// Every failure an Entity Store caller can observe.
///
/// # Examples
///
/// ```
/// use tabletop_error::{ConfigError, ConfigErrorKind, TabletopError};
///
/// let err: TabletopError = ConfigError::new(ConfigErrorKind::Parse("missing path".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TabletopErrorKind {
    /// Identifier, enum or field validation error
    #[from(EntityError)]
    Entity(EntityError),
    /// Storage layer error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Tabletop error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tabletop Error: {}", _0)]
pub struct TabletopError(Box<TabletopErrorKind>);

impl TabletopError {
    /// Create a new error from a kind.
    pub fn new(kind: TabletopErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TabletopErrorKind {
        &self.0
    }

    /// The entity validation error, if this is one.
    pub fn as_entity(&self) -> Option<&EntityError> {
        match self.kind() {
            TabletopErrorKind::Entity(err) => Some(err),
            _ => None,
        }
    }

    /// The configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self.kind() {
            TabletopErrorKind::Config(err) => Some(err),
            _ => None,
        }
    }

    /// The storage error, if this is one.
    #[cfg(feature = "database")]
    pub fn as_database(&self) -> Option<&DatabaseError> {
        match self.kind() {
            TabletopErrorKind::Database(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to TabletopErrorKind
impl<T> From<T> for TabletopError
where
    T: Into<TabletopErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tabletop operations.
pub type TabletopResult<T> = std::result::Result<T, TabletopError>;
