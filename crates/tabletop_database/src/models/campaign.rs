//! Campaign models.

use super::{IntoRecord, Record, timestamp};
use crate::schema::campaigns;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_json::Value;

/// Database row for the campaigns table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignRow {
    /// Primary key
    pub id: i64,
    /// Display name
    pub name: String,
    /// Guild snowflake
    pub guild_id: String,
    /// Channel snowflake
    pub channel_id: String,
    /// Creation time (UTC)
    pub created_at: NaiveDateTime,
    /// Last modification time (UTC)
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the campaigns table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaigns)]
pub struct NewCampaign<'a> {
    /// Display name
    pub name: &'a str,
    /// Guild snowflake
    pub guild_id: &'a str,
    /// Channel snowflake
    pub channel_id: &'a str,
}

impl IntoRecord for CampaignRow {
    fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id));
        record.insert("name".into(), Value::String(self.name));
        record.insert("guild_id".into(), Value::String(self.guild_id));
        record.insert("channel_id".into(), Value::String(self.channel_id));
        record.insert("created_at".into(), timestamp(self.created_at));
        record.insert("updated_at".into(), timestamp(self.updated_at));
        record
    }
}
