//! Entity store configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. A TOML file: the explicit path when given, else `./tabletop.toml` if present
//! 3. `TABLETOP_*` environment variables (e.g. `TABLETOP_DATABASE_PATH`)

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tabletop_error::{ConfigError, ConfigErrorKind, TabletopResult};

/// Default location of the SQLite file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "data/bot_database.db";

const DEFAULT_CONFIG: &str = r#"
database_path = "data/bot_database.db"
enforce_foreign_keys = true
busy_timeout_ms = 5000
"#;

/// Configuration for the entity store.
///
/// # Example
///
/// ```toml
/// database_path = "/var/lib/tabletop/campaigns.db"
/// enforce_foreign_keys = true
/// busy_timeout_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file
    pub database_path: PathBuf,

    /// Turn on `PRAGMA foreign_keys` for every connection
    #[serde(default = "default_enforce_foreign_keys")]
    pub enforce_foreign_keys: bool,

    /// How long a connection waits on a locked database, in milliseconds
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

fn default_enforce_foreign_keys() -> bool {
    true
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            enforce_foreign_keys: default_enforce_foreign_keys(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// Defaults with the database at `database_path`.
    pub fn with_path(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a specific TOML file only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> TabletopResult<Self> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load {
                    origin: path.display().to_string(),
                    reason: e.to_string(),
                })
            })?;

        Self::deserialize_checked(config)
    }

    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// With `path` set the file must exist; otherwise `./tabletop.toml` is
    /// read when present and silently skipped when not.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the result does not parse.
    pub fn load(path: Option<&Path>) -> TabletopResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        let origin = match path {
            Some(path) => {
                builder = builder.add_source(File::from(path));
                format!("{} and TABLETOP_* environment", path.display())
            }
            None => {
                builder = builder.add_source(File::with_name("tabletop").required(false));
                "./tabletop.toml and TABLETOP_* environment".to_string()
            }
        };

        let config = builder
            .add_source(Environment::with_prefix("TABLETOP").try_parsing(true))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load {
                    origin,
                    reason: e.to_string(),
                })
            })?;

        Self::deserialize_checked(config)
    }

    fn deserialize_checked(config: Config) -> TabletopResult<Self> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        if parsed.database_path.as_os_str().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::Invalid {
                setting: "database_path",
                reason: "must not be empty".to_string(),
            })
            .into());
        }

        Ok(parsed)
    }
}
