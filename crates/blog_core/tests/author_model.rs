use blog_core::{
    validate_name, validate_phone, AuthorChanges, NewAuthor, ValidationError, PHONE_NUMBER_DIGITS,
};

#[test]
fn every_ten_digit_string_is_a_valid_phone() {
    for value in ["0000000000", "0123456789", "9876543210", "5555555555"] {
        assert!(validate_phone(value).is_ok(), "{value} should be accepted");
    }
}

#[test]
fn phone_with_wrong_length_or_non_digit_is_rejected() {
    for value in [
        "",
        "012345678",
        "01234567890",
        "012-345-6789",
        "(012)3456789",
        "012345678a",
        " 0123456789",
        "+123456789",
    ] {
        assert_eq!(
            validate_phone(value),
            Err(ValidationError::InvalidPhoneNumber),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn empty_name_is_rejected() {
    assert_eq!(
        validate_name(""),
        Err(ValidationError::Empty { field: "name" })
    );
    assert!(validate_name("Ada").is_ok());
}

#[test]
fn new_author_checks_name_before_phone() {
    let err = NewAuthor::new("", "bad").unwrap_err();
    assert_eq!(err, ValidationError::Empty { field: "name" });

    let err = NewAuthor::new("Ada", "bad").unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhoneNumber);

    let author = NewAuthor::new("Ada", "0123456789").unwrap();
    assert_eq!(author.name(), "Ada");
    assert_eq!(author.phone_number(), "0123456789");
}

#[test]
fn author_changes_only_validate_present_fields() {
    assert!(AuthorChanges::default().validate().is_ok());
    assert!(AuthorChanges::default().is_empty());

    let changes = AuthorChanges {
        phone_number: Some("12345".to_string()),
        ..AuthorChanges::default()
    };
    assert_eq!(
        changes.validate(),
        Err(ValidationError::InvalidPhoneNumber)
    );
}

#[test]
fn deserialize_runs_author_validation() {
    let value = serde_json::json!({ "name": "Ada", "phone_number": "12345" });
    let err = serde_json::from_value::<NewAuthor>(value).unwrap_err();
    assert!(
        err.to_string().contains("phone_number must be exactly 10 digits"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({ "name": "Ada", "phone_number": "0123456789" });
    let author: NewAuthor = serde_json::from_value(value).unwrap();
    assert_eq!(author.name(), "Ada");
}

#[test]
fn phone_length_follows_digit_constant() {
    assert!(validate_phone(&"7".repeat(PHONE_NUMBER_DIGITS)).is_ok());
    assert!(validate_phone(&"7".repeat(PHONE_NUMBER_DIGITS - 1)).is_err());
    assert!(validate_phone(&"7".repeat(PHONE_NUMBER_DIGITS + 1)).is_err());
}
