//! Validation errors raised before anything reaches storage.

/// Entity validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EntityErrorKind {
    /// A platform identifier is not a non-empty string of ASCII digits.
    #[display("Invalid platform identifier: {:?}", _0)]
    InvalidIdentifier(String),

    /// A type tag matches neither a registry member nor a canonical value.
    #[display("Invalid {} value: {:?}", registry, value)]
    InvalidEnumValue {
        /// Name of the registry consulted (e.g. "PlayerType")
        registry: &'static str,
        /// The rejected candidate
        value: String,
    },

    /// An update named a field outside the updatable set.
    #[display("Unknown field: {}", _0)]
    UnknownField(String),

    /// An updatable field was given a value of the wrong shape.
    #[display("Invalid value for field '{}': {}", field, reason)]
    InvalidFieldValue {
        /// The field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Entity validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use tabletop_error::{EntityError, EntityErrorKind};
///
/// let err = EntityError::new(EntityErrorKind::UnknownField("foo".to_string()));
/// assert!(format!("{}", err).contains("Unknown field: foo"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Entity Error: {} at line {} in {}", kind, line, file)]
pub struct EntityError {
    kind: EntityErrorKind,
    line: u32,
    file: &'static str,
}

impl EntityError {
    /// Create a new EntityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EntityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EntityErrorKind {
        &self.kind
    }

    /// Line where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}
