//! Player models.

use super::{IntoRecord, Record, timestamp};
use crate::schema::players;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_json::Value;

/// Database row for the players table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerRow {
    /// Primary key
    pub id: i64,
    /// Display name
    pub name: String,
    /// Member snowflake
    pub member_id: String,
    /// Guild snowflake
    pub guild_id: String,
    /// Channel snowflake
    pub channel_id: String,
    /// Canonical player type string
    pub player_type: String,
    /// Creation time (UTC)
    pub created_at: NaiveDateTime,
    /// Last modification time (UTC)
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the players table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = players)]
pub struct NewPlayer<'a> {
    /// Display name
    pub name: &'a str,
    /// Member snowflake
    pub member_id: &'a str,
    /// Guild snowflake
    pub guild_id: &'a str,
    /// Channel snowflake
    pub channel_id: &'a str,
    /// Canonical player type string
    pub player_type: &'static str,
}

impl IntoRecord for PlayerRow {
    fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id));
        record.insert("name".into(), Value::String(self.name));
        record.insert("member_id".into(), Value::String(self.member_id));
        record.insert("guild_id".into(), Value::String(self.guild_id));
        record.insert("channel_id".into(), Value::String(self.channel_id));
        record.insert("type".into(), Value::String(self.player_type));
        record.insert("created_at".into(), timestamp(self.created_at));
        record.insert("updated_at".into(), timestamp(self.updated_at));
        record
    }
}
