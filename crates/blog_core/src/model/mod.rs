//! Blog domain model: records, validated drafts and field validators.
//!
//! # Responsibility
//! - Define the canonical `Author` and `Post` records read from storage.
//! - Provide validating constructors for not-yet-persisted drafts.
//! - Own the field validation contract shared by every write path.
//!
//! # Invariants
//! - A draft (`NewAuthor`, `NewPost`) only exists if all its fields passed
//!   validation.
//! - Validators are pure; name uniqueness lives in the service layer
//!   because it needs a repository read.

pub mod author;
pub mod post;
pub mod validation;
