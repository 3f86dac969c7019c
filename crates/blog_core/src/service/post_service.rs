//! Post use-case service.
//!
//! # Invariants
//! - Drafts and patches are validated with the repository's `PostRules`
//!   before any write, so a stored row always reads back.

use crate::model::post::{NewPost, Post, PostChanges, PostId};
use crate::repo::post_repo::PostRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::log_outcome;

/// Use-case service wrapper for post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service; validation rules come from `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and inserts a new post, returning the stored record.
    ///
    /// `category` must be exactly `Fiction` or `Non-Fiction`.
    pub fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        summary: Option<String>,
    ) -> RepoResult<Post> {
        let result =
            NewPost::with_rules(self.repo.rules(), title, content, category, summary)
                .map_err(RepoError::from)
                .and_then(|draft| self.repo.create_post(&draft))
                .and_then(|id| self.read_back(id));
        log_outcome(
            "post_create",
            &result,
            result.as_ref().ok().map(|post| post.id),
        );
        result
    }

    /// Validates and applies a partial update, returning the stored record.
    pub fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<Post> {
        let result = changes
            .validate(self.repo.rules())
            .map_err(RepoError::from)
            .and_then(|()| self.repo.update_post(id, changes))
            .and_then(|()| self.read_back(id));
        log_outcome("post_update", &result, Some(id));
        result
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self) -> RepoResult<Vec<Post>> {
        self.repo.list_posts()
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let result = self.repo.delete_post(id);
        log_outcome("post_delete", &result, Some(id));
        result
    }

    fn read_back(&self, id: PostId) -> RepoResult<Post> {
        self.repo
            .get_post(id)?
            .ok_or(RepoError::NotFound { entity: "post", id })
    }
}
