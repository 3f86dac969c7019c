//! Core domain logic for the blog backend.
//! This crate owns the author/post validation contract and its SQLite
//! persistence collaborator.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::author::{
    validate_name, validate_phone, Author, AuthorChanges, AuthorId, NewAuthor, PHONE_NUMBER_DIGITS,
};
pub use model::post::{
    validate_category, validate_content, validate_summary, validate_title, Category, NewPost,
    Post, PostChanges, PostId, PostRules,
};
pub use model::validation::ValidationError;
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::PostService;

/// Minimal health-check API for smoke probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
