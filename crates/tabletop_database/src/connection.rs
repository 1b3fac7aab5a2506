//! Per-operation SQLite connections.

use crate::StoreConfig;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tabletop_error::{DatabaseError, DatabaseErrorKind};

/// Make sure the directory holding the database file exists.
pub(crate) fn ensure_directory(config: &StoreConfig) -> Result<(), DatabaseError> {
    let Some(parent) = config.database_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(parent).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Directory(format!(
            "{}: {}",
            parent.display(),
            e
        )))
    })
}

/// Open a fresh connection with the configured pragmas applied.
///
/// The connection closes when dropped, so callers scope it to one unit of work.
pub(crate) fn establish(config: &StoreConfig) -> Result<SqliteConnection, DatabaseError> {
    let url = config.database_path.to_str().ok_or_else(|| {
        DatabaseError::new(DatabaseErrorKind::Connection(format!(
            "database path is not valid UTF-8: {}",
            config.database_path.display()
        )))
    })?;

    let mut conn = SqliteConnection::establish(url)?;

    let mut pragmas = format!("PRAGMA busy_timeout = {};", config.busy_timeout_ms);
    if config.enforce_foreign_keys {
        pragmas.push_str(" PRAGMA foreign_keys = ON;");
    }
    conn.batch_execute(&pragmas)?;

    Ok(conn)
}
