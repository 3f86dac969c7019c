use blog_core::{
    validate_category, validate_content, validate_summary, validate_title, Category, NewPost,
    PostChanges, PostRules, ValidationError,
};

fn text(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn clickbait_titles_pass_and_plain_titles_fail() {
    assert!(validate_title("Top 10 Secrets").is_ok());
    assert!(validate_title("You Won't Believe This").is_ok());
    assert!(validate_title("Guess Who").is_ok());
    assert_eq!(
        validate_title("My Daily Life"),
        Err(ValidationError::NotClickbait)
    );
}

#[test]
fn blank_title_is_rejected_as_empty() {
    for value in ["", "   ", "\t\n"] {
        assert_eq!(
            validate_title(value),
            Err(ValidationError::Empty { field: "title" })
        );
    }
}

#[test]
fn content_minimum_is_inclusive() {
    assert_eq!(
        validate_content(&text(249)),
        Err(ValidationError::TooShort {
            field: "content",
            min: 250,
            actual: 249,
        })
    );
    assert!(validate_content(&text(250)).is_ok());
    assert!(validate_content(&text(10_000)).is_ok());
}

#[test]
fn content_length_counts_characters_not_bytes() {
    let content = "é".repeat(250);
    assert!(content.len() > 250);
    assert!(validate_content(&content).is_ok());
    assert!(validate_content(&"é".repeat(249)).is_err());
}

#[test]
fn summary_maximum_is_inclusive_and_absent_is_fine() {
    assert!(validate_summary(None).is_ok());
    assert!(validate_summary(Some(&text(250))).is_ok());
    assert_eq!(
        validate_summary(Some(&text(251))),
        Err(ValidationError::TooLong {
            field: "summary",
            max: 250,
            actual: 251,
        })
    );
}

#[test]
fn category_requires_exact_match() {
    assert_eq!(validate_category("Fiction"), Ok(Category::Fiction));
    assert_eq!(validate_category("Non-Fiction"), Ok(Category::NonFiction));
    assert_eq!(
        validate_category("Mystery"),
        Err(ValidationError::UnknownCategory("Mystery".to_string()))
    );
    assert!("FICTION".parse::<Category>().is_err());
}

#[test]
fn new_post_reports_first_failing_field() {
    let err = NewPost::new("My Daily Life", "short", "Mystery", None).unwrap_err();
    assert_eq!(err, ValidationError::NotClickbait);

    let err = NewPost::new("Top 5", text(250), "Mystery", None).unwrap_err();
    assert_eq!(err.field(), "category");

    let post = NewPost::new("Top 5", text(250), "Non-Fiction", None).unwrap();
    assert_eq!(post.category(), Category::NonFiction);
    assert_eq!(post.summary(), None);
}

#[test]
fn custom_rules_apply_to_drafts_and_changes() {
    let rules = PostRules {
        clickbait_phrases: vec!["Shocking".to_string()],
        min_content_chars: 10,
        max_summary_chars: 5,
    };

    assert!(NewPost::with_rules(&rules, "Shocking", text(10), "Fiction", None).is_ok());
    assert!(NewPost::with_rules(&rules, "Top 10", text(10), "Fiction", None).is_err());

    let changes = PostChanges {
        summary: Some(Some(text(6))),
        ..PostChanges::default()
    };
    assert!(changes.validate(&rules).is_err());
    assert!(changes.validate(&PostRules::default()).is_ok());
}

#[test]
fn category_serializes_with_canonical_spelling() {
    let json = serde_json::to_value(Category::NonFiction).unwrap();
    assert_eq!(json, "Non-Fiction");
    let decoded: Category = serde_json::from_value(serde_json::json!("Fiction")).unwrap();
    assert_eq!(decoded, Category::Fiction);
}

#[test]
fn deserialize_runs_post_validation() {
    let value = serde_json::json!({
        "title": "Top 10 Secrets",
        "content": text(250),
        "category": "Mystery",
    });
    let err = serde_json::from_value::<NewPost>(value).unwrap_err();
    assert!(
        err.to_string().contains("category must be one of"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({
        "title": "Top 10 Secrets",
        "content": text(250),
        "category": "Fiction",
        "summary": "short",
    });
    let post: NewPost = serde_json::from_value(value).unwrap();
    assert_eq!(post.summary(), Some("short"));
}

#[test]
fn post_changes_distinguish_missing_and_null_summary() {
    let changes: PostChanges =
        serde_json::from_value(serde_json::json!({ "category": "Non-Fiction" })).unwrap();
    assert_eq!(changes.category, Some(Category::NonFiction));
    assert_eq!(changes.summary, None);

    let changes: PostChanges =
        serde_json::from_value(serde_json::json!({ "summary": null })).unwrap();
    assert_eq!(changes.summary, Some(None));
    assert!(!changes.is_empty());

    let json = serde_json::to_value(PostChanges {
        title: Some("Top 10".to_string()),
        ..PostChanges::default()
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({ "title": "Top 10" }));
}
