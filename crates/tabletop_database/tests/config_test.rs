use std::path::PathBuf;
use tabletop_core::CharacterType;
use tabletop_database::{DEFAULT_DATABASE_PATH, EntityStore, StoreConfig};
use tabletop_error::ConfigErrorKind;

#[test]
fn defaults() {
    let config = StoreConfig::default();
    assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
    assert!(config.enforce_foreign_keys);
    assert_eq!(config.busy_timeout_ms, 5000);
}

#[test]
fn file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tabletop.toml");
    std::fs::write(
        &path,
        r#"
database_path = "/srv/tabletop/campaigns.db"
busy_timeout_ms = 250
"#,
    )?;

    let config = StoreConfig::from_file(&path)?;
    assert_eq!(
        config.database_path,
        PathBuf::from("/srv/tabletop/campaigns.db")
    );
    assert_eq!(config.busy_timeout_ms, 250);
    assert!(config.enforce_foreign_keys);

    let loaded = StoreConfig::load(Some(&path))?;
    assert_eq!(loaded.database_path, config.database_path);
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error_naming_it() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");

    for err in [
        StoreConfig::from_file(&absent).unwrap_err(),
        StoreConfig::load(Some(&absent)).unwrap_err(),
    ] {
        match err.as_config().expect("config error").kind() {
            ConfigErrorKind::Load { origin, .. } => assert!(origin.contains("absent.toml")),
            other => panic!("expected a load error, got {other:?}"),
        }
    }
}

#[test]
fn empty_database_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabletop.toml");
    std::fs::write(&path, "database_path = \"\"\n").unwrap();

    let err = StoreConfig::from_file(&path).unwrap_err();
    assert!(matches!(
        err.as_config().expect("config error").kind(),
        ConfigErrorKind::Invalid {
            setting: "database_path",
            ..
        }
    ));
}

#[test]
fn with_path_keeps_other_defaults() {
    let config = StoreConfig::with_path("/tmp/x.db");
    assert_eq!(config.database_path, PathBuf::from("/tmp/x.db"));
    assert_eq!(config.busy_timeout_ms, StoreConfig::default().busy_timeout_ms);
}

#[test]
fn foreign_keys_can_be_left_unenforced() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = StoreConfig::with_path(dir.path().join("loose.db"));
    config.enforce_foreign_keys = false;
    let store = EntityStore::open(config).unwrap();

    let id = store
        .create_character("Stray", None, CharacterType::Npc, 41, 42)
        .expect("dangling references accepted");
    let row = store.get_character(id).unwrap().expect("stored");
    assert_eq!(row.player_id, 41);
    assert_eq!(row.campaign_id, 42);
}

#[test]
fn foreign_keys_are_enforced_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = EntityStore::open(StoreConfig::with_path(dir.path().join("strict.db"))).unwrap();

    assert!(
        store
            .create_character("Stray", None, CharacterType::Npc, 41, 42)
            .is_err()
    );
}
