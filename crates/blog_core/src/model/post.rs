//! Post domain model.
//!
//! # Responsibility
//! - Define the persisted `Post` record, its validated draft and patch.
//! - Provide the title/content/summary/category field validators.
//!
//! # Invariants
//! - `title` is non-blank and contains a clickbait phrase (case-sensitive).
//! - `content` has at least `min_content_chars` characters.
//! - `summary`, when present and non-empty, has at most `max_summary_chars`.
//! - `category` is one of the closed `Category` values.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned surrogate key for posts.
pub type PostId = i64;

/// Phrases a title must contain at least one of.
pub const CLICKBAIT_PHRASES: &[&str] = &["Won't Believe", "Secret", "Top ", "Guess"];
/// Minimum `content` length in characters.
pub const MIN_CONTENT_CHARS: usize = 250;
/// Maximum `summary` length in characters.
pub const MAX_SUMMARY_CHARS: usize = 250;

static DEFAULT_RULES: Lazy<PostRules> = Lazy::new(PostRules::default);

/// Closed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    /// Canonical wire/storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_category(value)
    }
}

/// Tunable post validation rules.
///
/// `PostRules::default()` is the stock rule set; categories are not part of
/// it because they are a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRules {
    pub clickbait_phrases: Vec<String>,
    pub min_content_chars: usize,
    pub max_summary_chars: usize,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            clickbait_phrases: CLICKBAIT_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
            min_content_chars: MIN_CONTENT_CHARS,
            max_summary_chars: MAX_SUMMARY_CHARS,
        }
    }
}

impl PostRules {
    pub fn validate_title(&self, title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if !self
            .clickbait_phrases
            .iter()
            .any(|phrase| title.contains(phrase.as_str()))
        {
            return Err(ValidationError::NotClickbait);
        }
        Ok(())
    }

    pub fn validate_content(&self, content: &str) -> Result<(), ValidationError> {
        let actual = content.chars().count();
        if actual < self.min_content_chars {
            return Err(ValidationError::TooShort {
                field: "content",
                min: self.min_content_chars,
                actual,
            });
        }
        Ok(())
    }

    /// Absent and empty summaries are accepted without checks.
    pub fn validate_summary(&self, summary: Option<&str>) -> Result<(), ValidationError> {
        let Some(summary) = summary.filter(|value| !value.is_empty()) else {
            return Ok(());
        };
        let actual = summary.chars().count();
        if actual > self.max_summary_chars {
            return Err(ValidationError::TooLong {
                field: "summary",
                max: self.max_summary_chars,
                actual,
            });
        }
        Ok(())
    }
}

/// Validates a title against the default rules.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    DEFAULT_RULES.validate_title(title)
}

/// Validates content length against the default rules.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    DEFAULT_RULES.validate_content(content)
}

/// Validates an optional summary against the default rules.
pub fn validate_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    DEFAULT_RULES.validate_summary(summary)
}

/// Parses a category with exact, case-sensitive matching.
pub fn validate_category(category: &str) -> Result<Category, ValidationError> {
    Category::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == category)
        .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))
}

/// Persisted post record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub summary: Option<String>,
    /// Unix epoch milliseconds, set once on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every update.
    pub updated_at: i64,
}

impl Post {
    /// Re-checks the field-level contract on a loaded record.
    pub fn validate(&self, rules: &PostRules) -> Result<(), ValidationError> {
        rules.validate_title(&self.title)?;
        rules.validate_content(&self.content)?;
        rules.validate_summary(self.summary.as_deref())
    }
}

/// Validated post draft that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostFields")]
pub struct NewPost {
    title: String,
    content: String,
    category: Category,
    summary: Option<String>,
}

#[derive(Deserialize)]
struct PostFields {
    title: String,
    content: String,
    category: String,
    #[serde(default)]
    summary: Option<String>,
}

impl TryFrom<PostFields> for NewPost {
    type Error = ValidationError;

    fn try_from(value: PostFields) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content, &value.category, value.summary)
    }
}

impl NewPost {
    /// Builds a draft using the default rules.
    ///
    /// Fields are checked in declaration order; the first failure wins.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        summary: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_rules(&DEFAULT_RULES, title, content, category, summary)
    }

    /// Builds a draft using a caller-provided rule set.
    pub fn with_rules(
        rules: &PostRules,
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        summary: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        rules.validate_title(&title)?;
        rules.validate_content(&content)?;
        let category = validate_category(category)?;
        rules.validate_summary(summary.as_deref())?;
        Ok(Self {
            title,
            content,
            category,
            summary,
        })
    }

    /// Re-checks the draft against another rule set.
    pub fn validate(&self, rules: &PostRules) -> Result<(), ValidationError> {
        rules.validate_title(&self.title)?;
        rules.validate_content(&self.content)?;
        rules.validate_summary(self.summary.as_deref())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// Partial update for an existing post. `None` leaves a field unchanged.
///
/// `summary: Some(None)` clears the stored summary. On the wire a missing
/// `summary` key leaves it unchanged and an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Already typed; parse raw input with [`validate_category`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_field"
    )]
    pub summary: Option<Option<String>>,
}

// Maps a present key (including `null`) to `Some(_)`; `default` covers absence.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl PostChanges {
    /// Runs the validators on every present field.
    pub fn validate(&self, rules: &PostRules) -> Result<(), ValidationError> {
        if let Some(title) = self.title.as_deref() {
            rules.validate_title(title)?;
        }
        if let Some(content) = self.content.as_deref() {
            rules.validate_content(content)?;
        }
        if let Some(summary) = self.summary.as_ref() {
            rules.validate_summary(summary.as_deref())?;
        }
        Ok(())
    }

    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_category, validate_summary, validate_title, Category, PostRules};
    use crate::model::validation::ValidationError;

    #[test]
    fn title_match_is_case_sensitive() {
        assert_eq!(
            validate_title("the secret life of bees"),
            Err(ValidationError::NotClickbait)
        );
        assert!(validate_title("The Secret Life of Bees").is_ok());
    }

    #[test]
    fn top_phrase_requires_trailing_space() {
        assert!(validate_title("Topology basics").is_err());
        assert!(validate_title("Top picks").is_ok());
    }

    #[test]
    fn empty_summary_is_treated_as_absent() {
        assert!(validate_summary(Some("")).is_ok());
    }

    #[test]
    fn category_round_trips_through_as_str() {
        for category in Category::ALL {
            assert_eq!(validate_category(category.as_str()), Ok(category));
        }
        assert!(validate_category("fiction").is_err());
        assert!(validate_category("Non-fiction").is_err());
    }

    #[test]
    fn custom_rules_replace_phrase_list() {
        let rules = PostRules {
            clickbait_phrases: vec!["Shocking".to_string()],
            ..PostRules::default()
        };
        assert!(rules.validate_title("Shocking news").is_ok());
        assert!(rules.validate_title("Top 10 Secrets").is_err());
    }
}
