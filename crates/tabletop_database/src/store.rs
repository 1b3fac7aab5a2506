//! The entity store: schema ownership and CRUD over players, campaigns and
//! characters.
//!
//! Every operation opens its own connection, does one unit of work and drops
//! the connection before returning, on error paths as well. Writes run inside
//! an immediate transaction so they commit or roll back as a unit.

use crate::connection::{establish, ensure_directory};
use crate::models::{
    CampaignRow, CharacterRow, NewCampaign, NewCharacter, NewPlayer, PlayerRow,
};
use crate::schema::{campaigns, characters, players};
use crate::{CharacterUpdate, SharedStore, StoreConfig};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use serde_json::Value;
use std::sync::Arc;
use tabletop_core::{CharacterType, PlayerType, Snowflake, TypeCandidate, TypeRegistry, resolve};
use tabletop_error::{DatabaseError, DatabaseErrorKind, TabletopResult};
use tracing::{debug, info, instrument, warn};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

static SHARED: SharedStore = SharedStore::new();

/// Owner of the database file and every query against it.
///
/// # Example
///
/// ```no_run
/// use tabletop_core::{CharacterType, PlayerType};
/// use tabletop_database::{EntityStore, StoreConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = EntityStore::open(StoreConfig::with_path("data/bot_database.db"))?;
///
/// let player = store.create_player("Ada", "111", "222", "333", PlayerType::Gm)?;
/// let campaign = store.create_campaign("Curse of Strahd", "222", "333")?;
/// store.create_character("Ireena", None, "NPC", player, campaign)?;
///
/// let npcs = store.get_all_characters_in_campaign(campaign)?;
/// assert_eq!(npcs[0].character_type, CharacterType::Npc.to_string());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EntityStore {
    config: StoreConfig,
}

impl EntityStore {
    /// Create the store, initializing the schema.
    ///
    /// Creates the parent directory and database file if missing and applies
    /// any pending schema migrations. Safe to call against an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the file cannot be
    /// opened, or the schema cannot be applied.
    #[instrument(skip_all, fields(path = %config.database_path.display()))]
    pub fn open(config: StoreConfig) -> TabletopResult<Self> {
        ensure_directory(&config)?;

        let mut conn = establish(&config)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?
            .len();

        info!(
            path = %config.database_path.display(),
            migrations_applied = applied,
            "Database initialized"
        );

        Ok(Self { config })
    }

    /// The process-wide store.
    ///
    /// The first call initializes it from `config`; later calls return the
    /// same instance and ignore their argument.
    ///
    /// # Errors
    ///
    /// Returns the initialization error of the first call that gets to run
    /// it. A failed initialization leaves the slot empty for the next caller.
    pub fn shared(config: &StoreConfig) -> TabletopResult<Arc<Self>> {
        SHARED.get_or_init(config)
    }

    /// Configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read<T>(
        &self,
        work: impl FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    ) -> TabletopResult<T> {
        let mut conn = establish(&self.config)?;
        Ok(work(&mut conn).map_err(DatabaseError::from)?)
    }

    fn write<T>(
        &self,
        work: impl FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    ) -> TabletopResult<T> {
        let mut conn = establish(&self.config)?;
        Ok(conn
            .immediate_transaction(work)
            .map_err(DatabaseError::from)?)
    }

    // ============================================================================
    // Player Operations
    // ============================================================================

    /// Register a member of a guild as a player.
    ///
    /// # Errors
    ///
    /// - `InvalidEnumValue` if `player_type` is not a player type
    /// - `InvalidIdentifier` if any platform id is not a digit string
    #[instrument(
        skip_all,
        fields(member_id = member_id.as_ref(), guild_id = guild_id.as_ref())
    )]
    pub fn create_player(
        &self,
        name: &str,
        member_id: impl AsRef<str>,
        guild_id: impl AsRef<str>,
        channel_id: impl AsRef<str>,
        player_type: impl Into<TypeCandidate<PlayerType>>,
    ) -> TabletopResult<i64> {
        let player_type = resolve(player_type)?;
        let member_id = Snowflake::parse(member_id.as_ref())?;
        let guild_id = Snowflake::parse(guild_id.as_ref())?;
        let channel_id = Snowflake::parse(channel_id.as_ref())?;

        let new_player = NewPlayer {
            name,
            member_id: member_id.as_str(),
            guild_id: guild_id.as_str(),
            channel_id: channel_id.as_str(),
            player_type: player_type.as_str(),
        };

        let id = self.write(|conn| {
            diesel::insert_into(players::table)
                .values(&new_player)
                .execute(conn)?;
            last_insert_id(conn)
        })?;

        debug!(player_id = id, player_type = %player_type, "Created player");
        Ok(id)
    }

    /// Get a player by ID.
    #[instrument(skip(self))]
    pub fn get_player(&self, player_id: i64) -> TabletopResult<Option<PlayerRow>> {
        self.read(|conn| {
            players::table
                .find(player_id)
                .select(PlayerRow::as_select())
                .first(conn)
                .optional()
        })
    }

    /// Find the earliest player registered for a member in a guild.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if either id is not a digit string.
    #[instrument(
        skip_all,
        fields(member_id = member_id.as_ref(), guild_id = guild_id.as_ref())
    )]
    pub fn find_player(
        &self,
        member_id: impl AsRef<str>,
        guild_id: impl AsRef<str>,
    ) -> TabletopResult<Option<PlayerRow>> {
        let member_id = Snowflake::parse(member_id.as_ref())?;
        let guild_id = Snowflake::parse(guild_id.as_ref())?;

        self.read(|conn| {
            players::table
                .filter(players::member_id.eq(member_id.as_str()))
                .filter(players::guild_id.eq(guild_id.as_str()))
                .order(players::id.asc())
                .select(PlayerRow::as_select())
                .first(conn)
                .optional()
        })
    }

    // ============================================================================
    // Campaign Operations
    // ============================================================================

    /// Start a campaign bound to a guild channel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if either platform id is not a digit string.
    #[instrument(
        skip_all,
        fields(guild_id = guild_id.as_ref(), channel_id = channel_id.as_ref())
    )]
    pub fn create_campaign(
        &self,
        name: &str,
        guild_id: impl AsRef<str>,
        channel_id: impl AsRef<str>,
    ) -> TabletopResult<i64> {
        let guild_id = Snowflake::parse(guild_id.as_ref())?;
        let channel_id = Snowflake::parse(channel_id.as_ref())?;

        let new_campaign = NewCampaign {
            name,
            guild_id: guild_id.as_str(),
            channel_id: channel_id.as_str(),
        };

        let id = self.write(|conn| {
            diesel::insert_into(campaigns::table)
                .values(&new_campaign)
                .execute(conn)?;
            last_insert_id(conn)
        })?;

        debug!(campaign_id = id, "Created campaign");
        Ok(id)
    }

    /// Get a campaign by ID.
    #[instrument(skip(self))]
    pub fn get_campaign(&self, campaign_id: i64) -> TabletopResult<Option<CampaignRow>> {
        self.read(|conn| {
            campaigns::table
                .find(campaign_id)
                .select(CampaignRow::as_select())
                .first(conn)
                .optional()
        })
    }

    /// Find the earliest campaign bound to a guild channel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if either id is not a digit string.
    #[instrument(
        skip_all,
        fields(guild_id = guild_id.as_ref(), channel_id = channel_id.as_ref())
    )]
    pub fn find_campaign_by_channel(
        &self,
        guild_id: impl AsRef<str>,
        channel_id: impl AsRef<str>,
    ) -> TabletopResult<Option<CampaignRow>> {
        let guild_id = Snowflake::parse(guild_id.as_ref())?;
        let channel_id = Snowflake::parse(channel_id.as_ref())?;

        self.read(|conn| {
            campaigns::table
                .filter(campaigns::guild_id.eq(guild_id.as_str()))
                .filter(campaigns::channel_id.eq(channel_id.as_str()))
                .order(campaigns::id.asc())
                .select(CampaignRow::as_select())
                .first(conn)
                .optional()
        })
    }

    // ============================================================================
    // Character Operations
    // ============================================================================

    /// Create a character owned by a player within a campaign.
    ///
    /// The owner and campaign are not looked up first; the foreign keys on the
    /// characters table reject dangling references.
    ///
    /// # Errors
    ///
    /// - `InvalidEnumValue` if `character_type` is not a character type
    /// - `ForeignKey` if the player or campaign does not exist
    #[instrument(skip(self, name, avatar_url, character_type))]
    pub fn create_character(
        &self,
        name: &str,
        avatar_url: Option<&str>,
        character_type: impl Into<TypeCandidate<CharacterType>>,
        player_id: i64,
        campaign_id: i64,
    ) -> TabletopResult<i64> {
        let character_type = resolve(character_type)?;

        let new_character = NewCharacter {
            name,
            avatar_url,
            character_type: character_type.as_str(),
            player_id,
            campaign_id,
        };

        let id = self.write(|conn| {
            diesel::insert_into(characters::table)
                .values(&new_character)
                .execute(conn)?;
            last_insert_id(conn)
        })?;

        debug!(character_id = id, character_type = %character_type, "Created character");
        Ok(id)
    }

    /// Get a character by ID.
    #[instrument(skip(self))]
    pub fn get_character(&self, character_id: i64) -> TabletopResult<Option<CharacterRow>> {
        self.read(|conn| {
            characters::table
                .find(character_id)
                .select(CharacterRow::as_select())
                .first(conn)
                .optional()
        })
    }

    /// Find a character by exact name within a campaign.
    ///
    /// When several characters share the name, the earliest created is returned.
    #[instrument(skip(self))]
    pub fn get_character_by_name_and_campaign(
        &self,
        name: &str,
        campaign_id: i64,
    ) -> TabletopResult<Option<CharacterRow>> {
        self.read(|conn| {
            characters::table
                .filter(characters::name.eq(name))
                .filter(characters::campaign_id.eq(campaign_id))
                .order(characters::id.asc())
                .select(CharacterRow::as_select())
                .first(conn)
                .optional()
        })
    }

    /// List a player's characters in a campaign, oldest first.
    #[instrument(skip(self))]
    pub fn get_characters_by_player_and_campaign(
        &self,
        player_id: i64,
        campaign_id: i64,
    ) -> TabletopResult<Vec<CharacterRow>> {
        self.read(|conn| {
            characters::table
                .filter(characters::player_id.eq(player_id))
                .filter(characters::campaign_id.eq(campaign_id))
                .order(characters::id.asc())
                .select(CharacterRow::as_select())
                .load(conn)
        })
    }

    /// List every character in a campaign, oldest first.
    #[instrument(skip(self))]
    pub fn get_all_characters_in_campaign(
        &self,
        campaign_id: i64,
    ) -> TabletopResult<Vec<CharacterRow>> {
        self.read(|conn| {
            characters::table
                .filter(characters::campaign_id.eq(campaign_id))
                .order(characters::id.asc())
                .select(CharacterRow::as_select())
                .load(conn)
        })
    }

    /// Apply a partial update to a character.
    ///
    /// Returns `false` without touching the database when the update is
    /// empty, and `false` when no character has `character_id`. `updated_at`
    /// is refreshed along with the supplied fields.
    #[instrument(skip(self, update), fields(fields = ?update.field_names()))]
    pub fn update_character(
        &self,
        character_id: i64,
        update: CharacterUpdate,
    ) -> TabletopResult<bool> {
        if update.is_empty() {
            debug!("No fields to update");
            return Ok(false);
        }

        let changeset = update.into_changeset();
        let rows = self.write(|conn| {
            diesel::update(characters::table.find(character_id))
                .set((&changeset, characters::updated_at.eq(diesel::dsl::now)))
                .execute(conn)
        })?;

        debug!(rows, "Updated character");
        Ok(rows > 0)
    }

    /// Apply a partial update given as named fields.
    ///
    /// Every name must be one of [`CharacterUpdate::FIELDS`]; one unknown
    /// name rejects the call before anything is written.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if any name is outside the updatable set
    /// - `InvalidEnumValue` if `type` is not a character type
    /// - `InvalidFieldValue` if a value has the wrong shape
    #[instrument(skip(self, fields))]
    pub fn update_character_fields<I, K>(
        &self,
        character_id: i64,
        fields: I,
    ) -> TabletopResult<bool>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let update = CharacterUpdate::from_fields(fields).inspect_err(|e| {
            warn!(error = %e, "Rejected character update");
        })?;

        self.update_character(character_id, update)
    }

    /// Delete a character by ID.
    ///
    /// Returns `true` whether or not a row matched.
    #[instrument(skip(self))]
    pub fn delete_character(&self, character_id: i64) -> TabletopResult<bool> {
        let rows = self.write(|conn| {
            diesel::delete(characters::table.find(character_id)).execute(conn)
        })?;

        debug!(rows, "Deleted character");
        Ok(true)
    }
}

fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i64> {
    diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)
}
