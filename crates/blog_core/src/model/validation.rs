//! Validation error shared by author and post field validators.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a field value was rejected.
///
/// Every variant renders a human-readable message naming the failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty (or whitespace-only where trimming applies).
    Empty { field: &'static str },
    /// Another author already uses this name.
    NameTaken(String),
    /// Phone number is not exactly ten ASCII digits.
    InvalidPhoneNumber,
    /// Title lacks every configured clickbait phrase.
    NotClickbait,
    /// Field is shorter than the allowed minimum (in characters).
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    /// Field is longer than the allowed maximum (in characters).
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// Category is not one of the supported values.
    UnknownCategory(String),
}

impl ValidationError {
    /// Name of the field the failed rule belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } => *field,
            Self::NameTaken(_) => "name",
            Self::InvalidPhoneNumber => "phone_number",
            Self::NotClickbait => "title",
            Self::TooShort { field, .. } => *field,
            Self::TooLong { field, .. } => *field,
            Self::UnknownCategory(_) => "category",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must be a non-empty string"),
            Self::NameTaken(name) => write!(f, "name must be unique: `{name}` is already taken"),
            Self::InvalidPhoneNumber => write!(f, "phone_number must be exactly 10 digits"),
            Self::NotClickbait => {
                write!(f, "title must contain at least one clickbait phrase")
            }
            Self::TooShort { field, min, actual } => write!(
                f,
                "{field} must be at least {min} characters long, got {actual}"
            ),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{field} must not exceed {max} characters, got {actual}"
            ),
            Self::UnknownCategory(value) => write!(
                f,
                "category must be one of: Fiction, Non-Fiction (got `{value}`)"
            ),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn messages_name_the_failed_rule() {
        let err = ValidationError::TooShort {
            field: "content",
            min: 250,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "content must be at least 250 characters long, got 12"
        );
        assert_eq!(err.field(), "content");

        let err = ValidationError::UnknownCategory("Mystery".to_string());
        assert!(err.to_string().contains("Fiction, Non-Fiction"));
        assert_eq!(err.field(), "category");
    }
}
