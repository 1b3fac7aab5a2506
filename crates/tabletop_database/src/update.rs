//! Partial character updates.

use crate::models::CharacterChangeset;
use serde_json::Value;
use tabletop_core::{CharacterType, TypeRegistry, resolve};
use tabletop_error::{EntityError, EntityErrorKind};

/// A set of character fields to change.
///
/// Build one with the typed setters, or from named fields with
/// [`CharacterUpdate::from_fields`] when the field names come from user input.
///
/// # Examples
///
/// ```
/// use tabletop_core::CharacterType;
/// use tabletop_database::CharacterUpdate;
///
/// let update = CharacterUpdate::new()
///     .name("Bob")
///     .character_type(CharacterType::Npc);
/// assert!(!update.is_empty());
/// assert!(CharacterUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterUpdate {
    name: Option<String>,
    avatar_url: Option<Option<String>>,
    character_type: Option<CharacterType>,
    player_id: Option<i64>,
    campaign_id: Option<i64>,
}

impl CharacterUpdate {
    /// Field names an update may touch.
    pub const FIELDS: [&'static str; 5] = ["name", "avatar_url", "type", "player_id", "campaign_id"];

    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the character.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the avatar reference; `None` clears it.
    pub fn avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    /// Change the character type.
    pub fn character_type(mut self, character_type: CharacterType) -> Self {
        self.character_type = Some(character_type);
        self
    }

    /// Hand the character to another player.
    pub fn player_id(mut self, player_id: i64) -> Self {
        self.player_id = Some(player_id);
        self
    }

    /// Move the character to another campaign.
    pub fn campaign_id(mut self, campaign_id: i64) -> Self {
        self.campaign_id = Some(campaign_id);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar_url.is_none()
            && self.character_type.is_none()
            && self.player_id.is_none()
            && self.campaign_id.is_none()
    }

    /// Build an update from named fields.
    ///
    /// Names are checked before any value is looked at, so a single unknown
    /// name rejects the whole set. A repeated name keeps its last value.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if any name is outside [`CharacterUpdate::FIELDS`]
    /// - `InvalidEnumValue` if `type` is not a canonical character type
    /// - `InvalidFieldValue` if a value has the wrong shape
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use tabletop_database::CharacterUpdate;
    ///
    /// let ok = CharacterUpdate::from_fields([("name", json!("Bob")), ("type", json!("NPC"))]);
    /// assert!(ok.is_ok());
    ///
    /// let mixed = CharacterUpdate::from_fields([("name", json!("Bob")), ("foo", json!("bar"))]);
    /// assert!(mixed.is_err());
    /// ```
    #[track_caller]
    pub fn from_fields<I, K>(fields: I) -> Result<Self, EntityError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let fields: Vec<(K, Value)> = fields.into_iter().collect();

        if let Some((field, _)) = fields
            .iter()
            .find(|(field, _)| !Self::FIELDS.contains(&field.as_ref()))
        {
            return Err(EntityError::new(EntityErrorKind::UnknownField(
                field.as_ref().to_string(),
            )));
        }

        let mut update = Self::default();
        for (field, value) in fields {
            let field = field.as_ref();
            match field {
                "name" => update.name = Some(string_value(field, value)?),
                "avatar_url" => {
                    update.avatar_url = Some(match value {
                        Value::Null => None,
                        other => Some(string_value(field, other)?),
                    })
                }
                "type" => {
                    update.character_type = Some(match value {
                        Value::String(raw) => resolve::<CharacterType>(raw)?,
                        other => {
                            return Err(EntityError::new(EntityErrorKind::InvalidEnumValue {
                                registry: CharacterType::REGISTRY,
                                value: other.to_string(),
                            }));
                        }
                    })
                }
                "player_id" => update.player_id = Some(id_value(field, &value)?),
                "campaign_id" => update.campaign_id = Some(id_value(field, &value)?),
                other => {
                    return Err(EntityError::new(EntityErrorKind::UnknownField(
                        other.to_string(),
                    )));
                }
            }
        }

        Ok(update)
    }

    /// Names of the fields this update sets, in [`CharacterUpdate::FIELDS`] order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let set = [
            self.name.is_some(),
            self.avatar_url.is_some(),
            self.character_type.is_some(),
            self.player_id.is_some(),
            self.campaign_id.is_some(),
        ];
        Self::FIELDS
            .iter()
            .zip(set)
            .filter_map(|(field, set)| set.then_some(*field))
            .collect()
    }

    pub(crate) fn into_changeset(self) -> CharacterChangeset {
        CharacterChangeset {
            name: self.name,
            avatar_url: self.avatar_url,
            character_type: self.character_type.map(|t| t.as_str().to_string()),
            player_id: self.player_id,
            campaign_id: self.campaign_id,
        }
    }
}

fn string_value(field: &str, value: Value) -> Result<String, EntityError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(EntityError::new(EntityErrorKind::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("expected a string, got {}", other),
        })),
    }
}

fn id_value(field: &str, value: &Value) -> Result<i64, EntityError> {
    value.as_i64().ok_or_else(|| {
        EntityError::new(EntityErrorKind::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("expected an integer id, got {}", value),
        })
    })
}
