//! Tabletop - player, campaign and character tracking for chat bots.
//!
//! A chat bot's command handlers translate platform messages into calls on
//! the [`EntityStore`], which persists three entities in a local SQLite file:
//!
//! - **Player**: a guild member, either a player or a GM
//! - **Campaign**: a game bound to a guild channel
//! - **Character**: a PC, companion or NPC owned by a player in a campaign
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabletop::{CharacterType, EntityStore, PlayerType, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = EntityStore::shared(&StoreConfig::load(None)?)?;
//!
//! let gm = store.create_player("Gina", "111", "222", "333", PlayerType::Gm)?;
//! let campaign = store.create_campaign("Out of the Abyss", "222", "333")?;
//! store.create_character("Demogorgon", None, CharacterType::Npc, gm, campaign)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `tabletop_error` - Error types
//! - `tabletop_core` - Snowflake identifiers and type registries
//! - `tabletop_database` - SQLite entity store
//!
//! This crate (`tabletop`) re-exports everything for convenience and ships
//! the `tabletop` command-line tool.

pub use tabletop_core::*;
pub use tabletop_database::*;
pub use tabletop_error::*;
