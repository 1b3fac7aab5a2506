//! Character models.

use super::{CampaignRow, IntoRecord, PlayerRow, Record, timestamp};
use crate::schema::characters;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_json::Value;

/// Database row for the characters table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Associations)]
#[diesel(belongs_to(PlayerRow, foreign_key = player_id))]
#[diesel(belongs_to(CampaignRow, foreign_key = campaign_id))]
#[diesel(table_name = characters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CharacterRow {
    /// Primary key
    pub id: i64,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Canonical character type string
    pub character_type: String,
    /// Owning player
    pub player_id: i64,
    /// Campaign the character belongs to
    pub campaign_id: i64,
    /// Creation time (UTC)
    pub created_at: NaiveDateTime,
    /// Last modification time (UTC)
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the characters table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = characters)]
pub struct NewCharacter<'a> {
    /// Display name
    pub name: &'a str,
    /// Avatar image URL
    pub avatar_url: Option<&'a str>,
    /// Canonical character type string
    pub character_type: &'static str,
    /// Owning player
    pub player_id: i64,
    /// Campaign the character belongs to
    pub campaign_id: i64,
}

/// Changeset for partial character updates.
///
/// `None` leaves a column untouched; `avatar_url: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = characters)]
pub struct CharacterChangeset {
    /// Display name
    pub name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<Option<String>>,
    /// Canonical character type string
    pub character_type: Option<String>,
    /// Owning player
    pub player_id: Option<i64>,
    /// Campaign the character belongs to
    pub campaign_id: Option<i64>,
}

impl IntoRecord for CharacterRow {
    fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id));
        record.insert("name".into(), Value::String(self.name));
        record.insert(
            "avatar_url".into(),
            self.avatar_url.map_or(Value::Null, Value::String),
        );
        record.insert("type".into(), Value::String(self.character_type));
        record.insert("player_id".into(), Value::from(self.player_id));
        record.insert("campaign_id".into(), Value::from(self.campaign_id));
        record.insert("created_at".into(), timestamp(self.created_at));
        record.insert("updated_at".into(), timestamp(self.updated_at));
        record
    }
}
