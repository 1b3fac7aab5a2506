use strum::IntoEnumIterator;
use tabletop_core::{CharacterType, PlayerType, TypeCandidate, TypeRegistry, resolve};
use tabletop_error::EntityErrorKind;

#[test]
fn canonical_forms() {
    assert_eq!(PlayerType::Player.as_str(), "Player");
    assert_eq!(PlayerType::Gm.as_str(), "GM");
    assert_eq!(CharacterType::PlayerCharacter.as_str(), "Player Character");
    assert_eq!(CharacterType::PlayerCompanion.as_str(), "Player Companion");
    assert_eq!(CharacterType::Npc.as_str(), "NPC");
}

#[test]
fn display_matches_canonical_form() {
    for tag in CharacterType::iter() {
        assert_eq!(tag.to_string(), tag.as_str());
    }
    for tag in PlayerType::iter() {
        assert_eq!(tag.to_string(), tag.as_str());
    }
}

#[test]
fn tag_and_raw_resolve_to_same_member() {
    assert_eq!(resolve(CharacterType::Npc).unwrap(), CharacterType::Npc);
    assert_eq!(resolve::<CharacterType>("NPC").unwrap(), CharacterType::Npc);
    assert_eq!(
        resolve::<CharacterType>(String::from("Player Companion")).unwrap(),
        CharacterType::PlayerCompanion
    );
    assert_eq!(resolve::<PlayerType>("GM").unwrap(), PlayerType::Gm);
}

#[test]
fn unknown_raw_value_is_invalid_enum_value() {
    let err = resolve::<CharacterType>("Wizard").unwrap_err();
    assert_eq!(
        err.kind(),
        &EntityErrorKind::InvalidEnumValue {
            registry: "CharacterType",
            value: "Wizard".to_string(),
        }
    );
}

#[test]
fn variant_names_are_not_canonical_forms() {
    // Only the stored strings are accepted, not the Rust identifiers or other casings.
    assert!(resolve::<CharacterType>("Npc").is_err());
    assert!(resolve::<CharacterType>("npc").is_err());
    assert!(resolve::<PlayerType>("Gm").is_err());
    assert!(resolve::<PlayerType>("").is_err());
}

#[test]
fn registries_do_not_cross() {
    assert!(resolve::<PlayerType>("NPC").is_err());
    assert!(resolve::<CharacterType>("GM").is_err());
}

#[test]
fn from_str_uses_canonical_forms() {
    assert_eq!("Player".parse::<PlayerType>().unwrap(), PlayerType::Player);
    assert_eq!(
        "Player Character".parse::<CharacterType>().unwrap(),
        CharacterType::PlayerCharacter
    );
    assert!("Wizard".parse::<CharacterType>().is_err());
}

#[test]
fn candidate_from_tag_resolves_without_lookup() {
    let candidate: TypeCandidate<PlayerType> = PlayerType::Gm.into();
    assert_eq!(candidate, TypeCandidate::Tag(PlayerType::Gm));
    assert_eq!(candidate.resolve().unwrap(), PlayerType::Gm);
}

#[test]
fn serde_uses_canonical_forms() {
    assert_eq!(
        serde_json::to_string(&CharacterType::PlayerCharacter).unwrap(),
        "\"Player Character\""
    );
    let gm: PlayerType = serde_json::from_str("\"GM\"").unwrap();
    assert_eq!(gm, PlayerType::Gm);
}

#[test]
fn all_lists_every_member() {
    assert_eq!(PlayerType::ALL.to_vec(), PlayerType::iter().collect::<Vec<_>>());
    assert_eq!(
        CharacterType::ALL.to_vec(),
        CharacterType::iter().collect::<Vec<_>>()
    );
}

#[test]
fn display_serde_and_canonical_forms_agree() {
    for tag in CharacterType::iter() {
        let canonical = tag.as_str();
        assert_eq!(tag.to_string(), canonical);
        assert_eq!(serde_json::to_value(tag).unwrap(), canonical);
        assert_eq!(
            serde_json::from_value::<CharacterType>(canonical.into()).unwrap(),
            tag
        );
        assert_eq!(canonical.parse::<CharacterType>().unwrap(), tag);
    }
    for tag in PlayerType::iter() {
        let canonical = tag.as_str();
        assert_eq!(tag.to_string(), canonical);
        assert_eq!(serde_json::to_value(tag).unwrap(), canonical);
        assert_eq!(
            serde_json::from_value::<PlayerType>(canonical.into()).unwrap(),
            tag
        );
        assert_eq!(canonical.parse::<PlayerType>().unwrap(), tag);
    }
}
