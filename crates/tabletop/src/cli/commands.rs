//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// Tabletop - player, campaign and character tracking for chat bots
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(about = "Player, campaign and character tracking for tabletop RPG chat bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./tabletop.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database file and schema if missing
    Init,

    /// Player commands
    #[command(subcommand)]
    Player(PlayerCommands),

    /// Campaign commands
    #[command(subcommand)]
    Campaign(CampaignCommands),

    /// Character commands
    #[command(subcommand)]
    Character(CharacterCommands),
}

/// Player subcommands
#[derive(Subcommand, Debug)]
pub enum PlayerCommands {
    /// Register a guild member as a player
    Create {
        /// Display name
        name: String,

        /// Member snowflake
        #[arg(long)]
        member_id: String,

        /// Guild snowflake
        #[arg(long)]
        guild_id: String,

        /// Channel snowflake
        #[arg(long)]
        channel_id: String,

        /// "Player" or "GM"
        #[arg(long = "type", default_value = "Player")]
        player_type: String,
    },

    /// Show a player by ID
    Show {
        /// Player ID
        id: i64,
    },

    /// Find a member's player in a guild
    Find {
        /// Member snowflake
        #[arg(long)]
        member_id: String,

        /// Guild snowflake
        #[arg(long)]
        guild_id: String,
    },
}

/// Campaign subcommands
#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// Start a campaign in a guild channel
    Create {
        /// Campaign name
        name: String,

        /// Guild snowflake
        #[arg(long)]
        guild_id: String,

        /// Channel snowflake
        #[arg(long)]
        channel_id: String,
    },

    /// Show a campaign by ID
    Show {
        /// Campaign ID
        id: i64,
    },

    /// Find the campaign bound to a channel
    Find {
        /// Guild snowflake
        #[arg(long)]
        guild_id: String,

        /// Channel snowflake
        #[arg(long)]
        channel_id: String,
    },
}

/// Character subcommands
#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Create a character
    Create {
        /// Character name
        name: String,

        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,

        /// "Player Character", "Player Companion" or "NPC"
        #[arg(long = "type", default_value = "Player Character")]
        character_type: String,

        /// Owning player ID
        #[arg(long)]
        player_id: i64,

        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,
    },

    /// Show a character by ID
    Show {
        /// Character ID
        id: i64,
    },

    /// Find a character by name within a campaign
    Find {
        /// Character name
        name: String,

        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,
    },

    /// List characters in a campaign
    List {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,

        /// Only this player's characters
        #[arg(long)]
        player_id: Option<i64>,
    },

    /// Update character fields
    Update(UpdateArgs),

    /// Delete a character
    Delete {
        /// Character ID
        id: i64,
    },
}

/// Arguments for `character update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Character ID
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New avatar URL
    #[arg(long, conflicts_with = "clear_avatar")]
    pub avatar_url: Option<String>,

    /// Remove the avatar URL
    #[arg(long)]
    pub clear_avatar: bool,

    /// New character type
    #[arg(long = "type")]
    pub character_type: Option<String>,

    /// New owning player ID
    #[arg(long)]
    pub player_id: Option<i64>,

    /// New campaign ID
    #[arg(long)]
    pub campaign_id: Option<i64>,

    /// Raw field assignment, e.g. `--set name=Bob` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(String, Value)>,
}

impl UpdateArgs {
    /// Collect the flags into named field updates, flags first, then `--set`.
    pub fn into_fields(self) -> Vec<(String, Value)> {
        let mut fields = Vec::new();
        if let Some(name) = self.name {
            fields.push(("name".to_string(), Value::String(name)));
        }
        if let Some(url) = self.avatar_url {
            fields.push(("avatar_url".to_string(), Value::String(url)));
        }
        if self.clear_avatar {
            fields.push(("avatar_url".to_string(), Value::Null));
        }
        if let Some(character_type) = self.character_type {
            fields.push(("type".to_string(), Value::String(character_type)));
        }
        if let Some(player_id) = self.player_id {
            fields.push(("player_id".to_string(), Value::from(player_id)));
        }
        if let Some(campaign_id) = self.campaign_id {
            fields.push(("campaign_id".to_string(), Value::from(campaign_id)));
        }
        fields.extend(self.assignments);
        fields
    }
}

/// Parse `FIELD=VALUE`.
///
/// `name` and `type` always take the value as text, and so does `avatar_url`
/// except for `null`, which clears it. Any other field reads the value as
/// JSON when it parses, else as text.
fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", raw))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    let value = match field {
        "name" | "type" => Value::String(value.to_string()),
        "avatar_url" if value == "null" => Value::Null,
        "avatar_url" => Value::String(value.to_string()),
        _ => serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string())),
    };
    Ok((field.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assignment_values_parse_as_json_or_string() {
        assert_eq!(
            parse_assignment("player_id=3").unwrap(),
            ("player_id".to_string(), Value::from(3))
        );
        assert_eq!(
            parse_assignment("type=NPC").unwrap(),
            ("type".to_string(), Value::String("NPC".to_string()))
        );
        assert_eq!(
            parse_assignment("avatar_url=null").unwrap(),
            ("avatar_url".to_string(), Value::Null)
        );
        assert_eq!(
            parse_assignment("name=Sir Bob=the Bold").unwrap(),
            ("name".to_string(), Value::String("Sir Bob=the Bold".to_string()))
        );
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=Bob").is_err());
    }

    #[test]
    fn text_fields_never_read_as_json() {
        assert_eq!(
            parse_assignment("name=123").unwrap(),
            ("name".to_string(), Value::String("123".to_string()))
        );
        assert_eq!(
            parse_assignment("name=true").unwrap(),
            ("name".to_string(), Value::String("true".to_string()))
        );
        assert_eq!(
            parse_assignment("type=null").unwrap(),
            ("type".to_string(), Value::String("null".to_string()))
        );
        assert_eq!(
            parse_assignment("avatar_url=42").unwrap(),
            ("avatar_url".to_string(), Value::String("42".to_string()))
        );
    }

    #[test]
    fn update_flags_become_named_fields() {
        let cli = Cli::parse_from([
            "tabletop",
            "character",
            "update",
            "7",
            "--name",
            "Bob",
            "--clear-avatar",
            "--set",
            "foo=bar",
        ]);
        let Commands::Character(CharacterCommands::Update(args)) = cli.command else {
            panic!("expected character update");
        };
        assert_eq!(args.id, 7);
        assert_eq!(
            args.into_fields(),
            vec![
                ("name".to_string(), Value::String("Bob".to_string())),
                ("avatar_url".to_string(), Value::Null),
                ("foo".to_string(), Value::String("bar".to_string())),
            ]
        );
    }
}
