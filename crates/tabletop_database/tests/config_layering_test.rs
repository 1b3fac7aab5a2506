//! Source precedence for `StoreConfig::load`.
//!
//! Changes the working directory and `TABLETOP_*` variables, which are
//! process-wide, so this file holds a single test and runs as its own binary.

use std::path::PathBuf;
use tabletop_database::{DEFAULT_DATABASE_PATH, StoreConfig};

const ENV_KEYS: [&str; 3] = [
    "TABLETOP_DATABASE_PATH",
    "TABLETOP_ENFORCE_FOREIGN_KEYS",
    "TABLETOP_BUSY_TIMEOUT_MS",
];

fn clear_env() {
    for key in ENV_KEYS {
        // SAFETY: this binary runs one test, so no other thread reads the environment.
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn defaults_then_working_directory_file_then_environment() {
    let original_dir = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    clear_env();

    // Nothing but built-in defaults.
    let config = StoreConfig::load(None).unwrap();
    assert_eq!(config, StoreConfig::default());
    assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));

    // ./tabletop.toml is picked up without being named.
    std::fs::write(
        dir.path().join("tabletop.toml"),
        "database_path = \"from_file.db\"\nbusy_timeout_ms = 10\n",
    )
    .unwrap();
    let config = StoreConfig::load(None).unwrap();
    assert_eq!(config.database_path, PathBuf::from("from_file.db"));
    assert_eq!(config.busy_timeout_ms, 10);
    assert!(config.enforce_foreign_keys);

    // TABLETOP_* variables override the file; unset keys keep the file's values.
    // SAFETY: single-test binary, see clear_env.
    unsafe {
        std::env::set_var("TABLETOP_DATABASE_PATH", "/tmp/env.db");
        std::env::set_var("TABLETOP_ENFORCE_FOREIGN_KEYS", "false");
    }
    let config = StoreConfig::load(None).unwrap();
    assert_eq!(
        config,
        StoreConfig {
            database_path: PathBuf::from("/tmp/env.db"),
            enforce_foreign_keys: false,
            busy_timeout_ms: 10,
        }
    );

    // The environment also wins over an explicitly named file.
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "database_path = \"explicit.db\"\nbusy_timeout_ms = 20\n").unwrap();
    let config = StoreConfig::load(Some(&explicit)).unwrap();
    assert_eq!(config.database_path, PathBuf::from("/tmp/env.db"));
    assert_eq!(config.busy_timeout_ms, 20);

    clear_env();
    std::env::set_current_dir(original_dir).unwrap();
}
