//! Platform snowflake identifiers.
//!
//! Snowflakes arrive from the chat platform as decimal digit strings and are
//! stored as text, so no integer width is ever assumed.

use serde::{Deserialize, Serialize};
use tabletop_error::{EntityError, EntityErrorKind};

/// Returns true iff `value` is one or more ASCII digits.
///
/// # Examples
///
/// ```
/// use tabletop_core::is_valid;
///
/// assert!(is_valid("123456789012345678"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("12a4"));
/// ```
pub fn is_valid(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Like [`is_valid`], for values that may be absent.
pub fn is_valid_value(value: Option<&str>) -> bool {
    value.is_some_and(is_valid)
}

/// A validated platform identifier.
///
/// The only way to build one is through [`Snowflake::parse`] (or the
/// equivalent `TryFrom`/`FromStr`/serde paths), so holding a `Snowflake`
/// means the digits check already passed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
#[display("{}", _0)]
pub struct Snowflake(String);

impl Snowflake {
    /// Validate and wrap a platform identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the value is empty or contains
    /// anything but ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabletop_core::Snowflake;
    ///
    /// let guild = Snowflake::parse("123456789012345678").unwrap();
    /// assert_eq!(guild.as_str(), "123456789012345678");
    /// assert!(Snowflake::parse("abc").is_err());
    /// ```
    #[track_caller]
    pub fn parse(value: impl Into<String>) -> Result<Self, EntityError> {
        let value = value.into();
        if is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(EntityError::new(EntityErrorKind::InvalidIdentifier(value)))
        }
    }

    /// The identifier's digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Snowflake {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Snowflake {
    type Error = EntityError;

    #[track_caller]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Snowflake {
    type Error = EntityError;

    #[track_caller]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for Snowflake {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Snowflake> for String {
    fn from(value: Snowflake) -> Self {
        value.0
    }
}
