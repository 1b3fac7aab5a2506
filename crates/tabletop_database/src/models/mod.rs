//! Diesel models for the entity tables.
//!
//! Every read hands back owned rows, never cursors, and each row converts to
//! a plain [`Record`] keyed by column name.

mod campaign;
mod character;
mod player;

pub use campaign::{CampaignRow, NewCampaign};
pub use character::{CharacterChangeset, CharacterRow, NewCharacter};
pub use player::{NewPlayer, PlayerRow};

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// A row as a field-name-to-value mapping.
pub type Record = Map<String, Value>;

/// Timestamp layout SQLite uses for `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Conversion of an owned row into a [`Record`].
pub trait IntoRecord {
    /// Consume the row, producing its field mapping.
    fn into_record(self) -> Record;
}

pub(crate) fn timestamp(value: NaiveDateTime) -> Value {
    Value::String(value.format(TIMESTAMP_FORMAT).to_string())
}
