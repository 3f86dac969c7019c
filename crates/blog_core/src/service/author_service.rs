//! Author use-case service.
//!
//! # Invariants
//! - `name` uniqueness is pre-checked here for a precise error; the
//!   storage UNIQUE constraint still backs every write.
//! - An author's own row never counts as a name conflict on update.

use crate::model::author::{self, Author, AuthorChanges, AuthorId, NewAuthor};
use crate::model::validation::ValidationError;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::log_outcome;

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Checks that `name` is non-empty and not used by any stored author.
    ///
    /// # Side effects
    /// - Performs one read against the repository.
    pub fn validate_name(&self, name: &str) -> RepoResult<()> {
        self.ensure_name_available(name, None)
    }

    /// Validates and inserts a new author, returning the stored record.
    pub fn create_author(
        &self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> RepoResult<Author> {
        let result = self.create_author_inner(name.into(), phone_number.into());
        log_outcome(
            "author_create",
            &result,
            result.as_ref().ok().map(|author| author.id),
        );
        result
    }

    /// Validates and applies a partial update, returning the stored record.
    ///
    /// Returns `NotFound` when `id` does not exist.
    pub fn update_author(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<Author> {
        let result = self.update_author_inner(id, changes);
        log_outcome("author_update", &result, Some(id));
        result
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    pub fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let result = self.repo.delete_author(id);
        log_outcome("author_delete", &result, Some(id));
        result
    }

    fn create_author_inner(&self, name: String, phone_number: String) -> RepoResult<Author> {
        let draft = NewAuthor::new(name, phone_number)?;
        self.ensure_name_available(draft.name(), None)?;
        let id = self.repo.create_author(&draft)?;
        self.read_back(id)
    }

    fn update_author_inner(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<Author> {
        changes.validate()?;
        if let Some(name) = changes.name.as_deref() {
            self.ensure_name_available(name, Some(id))?;
        }
        self.repo.update_author(id, changes)?;
        self.read_back(id)
    }

    fn ensure_name_available(&self, name: &str, owner: Option<AuthorId>) -> RepoResult<()> {
        author::validate_name(name)?;
        match self.repo.find_author_by_name(name)? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ValidationError::NameTaken(name.to_string()).into())
            }
            _ => Ok(()),
        }
    }

    fn read_back(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo.get_author(id)?.ok_or(RepoError::NotFound {
            entity: "author",
            id,
        })
    }
}
