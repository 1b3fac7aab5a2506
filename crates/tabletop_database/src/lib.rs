//! SQLite entity store for the Tabletop campaign bot.
//!
//! This crate owns the database file holding players, campaigns and
//! characters, and every read and write against it.
//!
//! # Features
//!
//! - Diesel-based SQLite integration with embedded schema migrations
//! - Identifier and type validation before anything is written
//! - Partial character updates with a closed set of field names
//! - A lock-guarded shared instance for process-wide use
//!
//! # Example
//!
//! ```rust,no_run
//! use tabletop_database::{EntityStore, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::load(None)?;
//! let store = EntityStore::shared(&config)?;
//! let campaign = store.create_campaign("Tomb of Annihilation", "123", "456")?;
//! println!("campaign {campaign}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod connection;
mod models;
mod shared;
mod store;
mod update;

/// Diesel table definitions.
#[allow(missing_docs)]
pub mod schema;

pub use config::{DEFAULT_DATABASE_PATH, StoreConfig};
pub use models::{
    CampaignRow, CharacterChangeset, CharacterRow, IntoRecord, NewCampaign, NewCharacter,
    NewPlayer, PlayerRow, Record, TIMESTAMP_FORMAT,
};
pub use shared::SharedStore;
pub use store::EntityStore;
pub use update::CharacterUpdate;
