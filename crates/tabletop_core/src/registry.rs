//! Closed registries of player and character types.
//!
//! Each registry is an enum whose variants carry a fixed canonical string.
//! The canonical string is what gets stored; callers may hand in either the
//! variant or that string, and [`resolve`] settles both to the variant.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tabletop_error::{EntityError, EntityErrorKind};

/// A closed set of string-valued type tags.
pub trait TypeRegistry: IntoEnumIterator + Copy + 'static {
    /// Registry name used in error messages.
    const REGISTRY: &'static str;

    /// Canonical string form stored in the database.
    fn as_str(&self) -> &'static str;

    /// Look up the tag whose canonical form is exactly `value`.
    fn from_canonical(value: &str) -> Option<Self> {
        Self::iter().find(|tag| tag.as_str() == value)
    }
}

/// Role a member plays at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PlayerType {
    /// Regular participant
    #[display("Player")]
    #[serde(rename = "Player")]
    Player,
    /// Game master running the campaign
    #[display("GM")]
    #[serde(rename = "GM")]
    Gm,
}

impl PlayerType {
    /// Every player type, in declaration order.
    pub const ALL: [PlayerType; 2] = [PlayerType::Player, PlayerType::Gm];
}

impl TypeRegistry for PlayerType {
    const REGISTRY: &'static str = "PlayerType";

    fn as_str(&self) -> &'static str {
        match self {
            PlayerType::Player => "Player",
            PlayerType::Gm => "GM",
        }
    }
}

/// Kind of character sheet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum CharacterType {
    /// A player's main character
    #[display("Player Character")]
    #[serde(rename = "Player Character")]
    PlayerCharacter,
    /// A companion, familiar or hireling controlled by a player
    #[display("Player Companion")]
    #[serde(rename = "Player Companion")]
    PlayerCompanion,
    /// Non-player character run by the GM
    #[display("NPC")]
    #[serde(rename = "NPC")]
    Npc,
}

impl CharacterType {
    /// Every character type, in declaration order.
    pub const ALL: [CharacterType; 3] = [
        CharacterType::PlayerCharacter,
        CharacterType::PlayerCompanion,
        CharacterType::Npc,
    ];
}

impl TypeRegistry for CharacterType {
    const REGISTRY: &'static str = "CharacterType";

    fn as_str(&self) -> &'static str {
        match self {
            CharacterType::PlayerCharacter => "Player Character",
            CharacterType::PlayerCompanion => "Player Companion",
            CharacterType::Npc => "NPC",
        }
    }
}

macro_rules! registry_conversions {
    ($($ty:ty),*) => {$(
        impl std::str::FromStr for $ty {
            type Err = EntityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                resolve::<$ty>(s)
            }
        }

        impl From<$ty> for TypeCandidate<$ty> {
            fn from(tag: $ty) -> Self {
                TypeCandidate::Tag(tag)
            }
        }
    )*};
}

registry_conversions!(PlayerType, CharacterType);

/// A type supplied by a caller: already a tag, or a raw string to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCandidate<T> {
    /// A registry member
    Tag(T),
    /// A string that must equal some member's canonical form
    Raw(String),
}

impl<T> From<&str> for TypeCandidate<T> {
    fn from(value: &str) -> Self {
        TypeCandidate::Raw(value.to_string())
    }
}

impl<T> From<String> for TypeCandidate<T> {
    fn from(value: String) -> Self {
        TypeCandidate::Raw(value)
    }
}

impl<T> From<&String> for TypeCandidate<T> {
    fn from(value: &String) -> Self {
        TypeCandidate::Raw(value.clone())
    }
}

impl<T: TypeRegistry> TypeCandidate<T> {
    /// Settle the candidate to a registry member.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnumValue` when a raw string matches no canonical form.
    #[track_caller]
    pub fn resolve(self) -> Result<T, EntityError> {
        match self {
            TypeCandidate::Tag(tag) => Ok(tag),
            TypeCandidate::Raw(value) => T::from_canonical(&value).ok_or_else(|| {
                EntityError::new(EntityErrorKind::InvalidEnumValue {
                    registry: T::REGISTRY,
                    value,
                })
            }),
        }
    }
}

/// Resolve a tag or canonical string to a registry member.
///
/// # Examples
///
/// ```
/// use tabletop_core::{CharacterType, TypeRegistry, resolve};
///
/// let tagged = resolve(CharacterType::Npc).unwrap();
/// let raw = resolve::<CharacterType>("NPC").unwrap();
/// assert_eq!(tagged, raw);
/// assert_eq!(raw.as_str(), "NPC");
/// assert!(resolve::<CharacterType>("Wizard").is_err());
/// ```
#[track_caller]
pub fn resolve<T: TypeRegistry>(candidate: impl Into<TypeCandidate<T>>) -> Result<T, EntityError> {
    candidate.into().resolve()
}
