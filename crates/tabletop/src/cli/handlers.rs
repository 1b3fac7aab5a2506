//! Command handlers.
//!
//! Every command prints its result to stdout as pretty JSON so the output
//! can be piped into other tools. Logs go to stderr.

use super::commands::{CampaignCommands, CharacterCommands, Commands, PlayerCommands};
use serde_json::{Value, json};
use tabletop::{EntityStore, IntoRecord, JsonError, TabletopResult};

/// Dispatch a parsed command against the store.
pub fn handle_command(store: &EntityStore, command: Commands) -> TabletopResult<()> {
    match command {
        Commands::Init => {
            let path = store.config().database_path.display().to_string();
            tracing::info!(path = %path, "Database ready");
            print_json("init result", &json!({ "database_path": path }))
        }
        Commands::Player(cmd) => handle_player(store, cmd),
        Commands::Campaign(cmd) => handle_campaign(store, cmd),
        Commands::Character(cmd) => handle_character(store, cmd),
    }
}

fn handle_player(store: &EntityStore, command: PlayerCommands) -> TabletopResult<()> {
    match command {
        PlayerCommands::Create {
            name,
            member_id,
            guild_id,
            channel_id,
            player_type,
        } => {
            let id = store.create_player(&name, member_id, guild_id, channel_id, player_type)?;
            print_json("created id", &json!({ "id": id }))
        }
        PlayerCommands::Show { id } => print_optional(store.get_player(id)?),
        PlayerCommands::Find {
            member_id,
            guild_id,
        } => print_optional(store.find_player(member_id, guild_id)?),
    }
}

fn handle_campaign(store: &EntityStore, command: CampaignCommands) -> TabletopResult<()> {
    match command {
        CampaignCommands::Create {
            name,
            guild_id,
            channel_id,
        } => {
            let id = store.create_campaign(&name, guild_id, channel_id)?;
            print_json("created id", &json!({ "id": id }))
        }
        CampaignCommands::Show { id } => print_optional(store.get_campaign(id)?),
        CampaignCommands::Find {
            guild_id,
            channel_id,
        } => print_optional(store.find_campaign_by_channel(guild_id, channel_id)?),
    }
}

fn handle_character(store: &EntityStore, command: CharacterCommands) -> TabletopResult<()> {
    match command {
        CharacterCommands::Create {
            name,
            avatar_url,
            character_type,
            player_id,
            campaign_id,
        } => {
            let id = store.create_character(
                &name,
                avatar_url.as_deref(),
                character_type,
                player_id,
                campaign_id,
            )?;
            print_json("created id", &json!({ "id": id }))
        }
        CharacterCommands::Show { id } => print_optional(store.get_character(id)?),
        CharacterCommands::Find { name, campaign_id } => {
            print_optional(store.get_character_by_name_and_campaign(&name, campaign_id)?)
        }
        CharacterCommands::List {
            campaign_id,
            player_id,
        } => {
            let rows = match player_id {
                Some(player_id) => {
                    store.get_characters_by_player_and_campaign(player_id, campaign_id)?
                }
                None => store.get_all_characters_in_campaign(campaign_id)?,
            };
            let records: Vec<Value> = rows
                .into_iter()
                .map(|row| Value::Object(row.into_record()))
                .collect();
            print_json("character list", &Value::Array(records))
        }
        CharacterCommands::Update(args) => {
            let id = args.id;
            let updated = store.update_character_fields(id, args.into_fields())?;
            print_json("update result", &json!({ "id": id, "updated": updated }))
        }
        CharacterCommands::Delete { id } => {
            let deleted = store.delete_character(id)?;
            print_json("delete result", &json!({ "id": id, "deleted": deleted }))
        }
    }
}

fn print_optional(row: Option<impl IntoRecord>) -> TabletopResult<()> {
    match row {
        Some(row) => print_json("record", &Value::Object(row.into_record())),
        None => {
            tracing::warn!("Not found");
            print_json("record", &Value::Null)
        }
    }
}

fn print_json(subject: &str, value: &Value) -> TabletopResult<()> {
    let output =
        serde_json::to_string_pretty(value).map_err(|e| JsonError::new(subject, e.to_string()))?;
    println!("{}", output);
    Ok(())
}
