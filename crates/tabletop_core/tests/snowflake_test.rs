use tabletop_core::{Snowflake, is_valid, is_valid_value};
use tabletop_error::EntityErrorKind;

#[test]
fn digit_strings_are_valid() {
    assert!(is_valid("0"));
    assert!(is_valid("123456789012345678"));
    assert!(is_valid("00000000000000000000000000000000000042"));
}

#[test]
fn empty_and_non_digit_strings_are_invalid() {
    assert!(!is_valid(""));
    assert!(!is_valid("abc"));
    assert!(!is_valid("123 456"));
    assert!(!is_valid("-123"));
    assert!(!is_valid("+123"));
    assert!(!is_valid("12.5"));
    assert!(!is_valid(" 123"));
}

#[test]
fn non_ascii_digits_are_invalid() {
    // Arabic-Indic and fullwidth digits
    assert!(!is_valid("١٢٣"));
    assert!(!is_valid("１２３"));
}

#[test]
fn absent_value_is_invalid() {
    assert!(!is_valid_value(None));
    assert!(!is_valid_value(Some("")));
    assert!(is_valid_value(Some("42")));
}

#[test]
fn predicate_matches_definition_for_every_short_ascii_string() {
    let alphabet = ['0', '5', '9', 'a', ' ', '-', '/', ':'];
    for a in alphabet {
        for b in alphabet {
            let s: String = [a, b].iter().collect();
            let expected = s.chars().all(|c| c.is_ascii_digit());
            assert_eq!(is_valid(&s), expected, "{s:?}");
        }
    }
}

#[test]
fn parse_rejects_with_invalid_identifier() {
    let err = Snowflake::parse("abc").unwrap_err();
    assert_eq!(
        err.kind(),
        &EntityErrorKind::InvalidIdentifier("abc".to_string())
    );
}

#[test]
fn parse_accepts_and_preserves_digits() {
    let id = Snowflake::parse("123456789012345678").unwrap();
    assert_eq!(id.as_str(), "123456789012345678");
    assert_eq!(id.to_string(), "123456789012345678");
    assert_eq!(String::from(id), "123456789012345678");
}

#[test]
fn serde_validates_on_deserialize() {
    let ok: Snowflake = serde_json::from_str("\"987654321\"").unwrap();
    assert_eq!(ok.as_str(), "987654321");

    let bad: Result<Snowflake, _> = serde_json::from_str("\"98x\"");
    assert!(bad.is_err());

    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"987654321\"");
}
