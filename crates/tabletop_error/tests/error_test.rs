use tabletop_error::{ConfigError, ConfigErrorKind, JsonError, TabletopError};

#[test]
fn config_load_error_names_its_origin() {
    let err = ConfigError::new(ConfigErrorKind::Load {
        origin: "/etc/tabletop.toml".to_string(),
        reason: "permission denied".to_string(),
    });
    let message = err.to_string();
    assert!(message.contains("/etc/tabletop.toml"));
    assert!(message.contains("permission denied"));
}

#[test]
fn config_error_keeps_kind_through_wrapper() {
    let err: TabletopError = ConfigError::new(ConfigErrorKind::Invalid {
        setting: "database_path",
        reason: "must not be empty".to_string(),
    })
    .into();

    let config = err.as_config().expect("config error");
    assert_eq!(
        config.kind(),
        &ConfigErrorKind::Invalid {
            setting: "database_path",
            reason: "must not be empty".to_string(),
        }
    );
    assert!(err.as_entity().is_none());
}

#[test]
fn json_error_names_what_was_rendered() {
    let err = JsonError::new("character list", "key must be a string");
    assert_eq!(err.subject, "character list");
    assert!(err.to_string().contains("could not render character list"));
}
