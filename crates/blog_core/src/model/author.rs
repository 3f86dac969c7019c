//! Author domain model.
//!
//! # Responsibility
//! - Define the persisted `Author` record and its validated draft.
//! - Provide the pure `name` and `phone_number` field validators.
//!
//! # Invariants
//! - `name` is non-empty. Uniqueness is checked by `AuthorService` and
//!   enforced by the `authors.name` UNIQUE constraint.
//! - `phone_number` is exactly ten ASCII digits, stored without
//!   normalization.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Storage-assigned surrogate key for authors.
pub type AuthorId = i64;

/// Number of digits required in `phone_number`.
pub const PHONE_NUMBER_DIGITS: usize = 10;

// `\d` would also accept non-ASCII Unicode digits.
static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{PHONE_NUMBER_DIGITS}}}$")).expect("valid phone number regex")
});

/// Persisted author record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub phone_number: String,
    /// Unix epoch milliseconds, set once on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every update.
    pub updated_at: i64,
}

impl Author {
    /// Re-checks the field-level contract on a loaded record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_phone(&self.phone_number)
    }
}

/// Validated author draft that has not been persisted yet.
///
/// Fields are private so a value can only be obtained through
/// [`NewAuthor::new`] (or deserialization, which runs the same checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorFields")]
pub struct NewAuthor {
    name: String,
    phone_number: String,
}

#[derive(Deserialize)]
struct AuthorFields {
    name: String,
    phone_number: String,
}

impl TryFrom<AuthorFields> for NewAuthor {
    type Error = ValidationError;

    fn try_from(value: AuthorFields) -> Result<Self, Self::Error> {
        Self::new(value.name, value.phone_number)
    }
}

impl NewAuthor {
    /// Builds a draft after running the pure field validators.
    ///
    /// # Errors
    /// - `ValidationError::Empty` when `name` is empty.
    /// - `ValidationError::InvalidPhoneNumber` when `phone_number` is not ten digits.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone_number = phone_number.into();
        validate_name(&name)?;
        validate_phone(&phone_number)?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

/// Partial update for an existing author. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthorChanges {
    /// Runs the pure validators on every present field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(phone_number) = self.phone_number.as_deref() {
            validate_phone(phone_number)?;
        }
        Ok(())
    }

    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}

/// Rejects an empty author name.
///
/// Whitespace is not trimmed; only the empty string is rejected here.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    Ok(())
}

/// Accepts exactly ten ASCII digits and nothing else.
pub fn validate_phone(phone_number: &str) -> Result<(), ValidationError> {
    if !PHONE_NUMBER_RE.is_match(phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(())
}
