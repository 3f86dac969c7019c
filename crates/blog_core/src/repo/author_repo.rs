//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs plus the by-name lookup over `authors` storage.
//! - Translate the `authors.name` UNIQUE constraint into a validation error.
//!
//! # Invariants
//! - Storage assigns `id` and `created_at`; `updated_at` is refreshed by
//!   every non-empty update.
//! - Deleting an author has no cascade effects.

use crate::model::author::{Author, AuthorChanges, AuthorId, NewAuthor};
use crate::model::validation::ValidationError;
use crate::repo::{ensure_connection_ready, is_unique_violation, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

const AUTHOR_COLUMNS: &[&str] = &["id", "name", "phone_number", "created_at", "updated_at"];

/// Repository interface for author persistence.
pub trait AuthorRepository {
    /// Inserts a validated draft and returns the storage-assigned id.
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId>;
    /// Applies present fields of `changes`; refreshes `updated_at`.
    fn update_author(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Exact, case-sensitive lookup used by the uniqueness pre-check.
    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    /// Returns all authors ordered by `id ASC`.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "authors", AUTHOR_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId> {
        self.conn
            .execute(
                "INSERT INTO authors (name, phone_number) VALUES (?1, ?2);",
                params![author.name(), author.phone_number()],
            )
            .map_err(|err| name_conflict_or(err, author.name()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_author(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<()> {
        changes.validate()?;

        if changes.is_empty() {
            return match self.get_author(id)? {
                Some(_) => Ok(()),
                None => Err(not_found(id)),
            };
        }

        let changed = self
            .conn
            .execute(
                "UPDATE authors
                 SET
                    name = COALESCE(?1, name),
                    phone_number = COALESCE(?2, phone_number),
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?3;",
                params![
                    changes.name.as_deref(),
                    changes.phone_number.as_deref(),
                    id
                ],
            )
            .map_err(|err| name_conflict_or(err, changes.name.as_deref().unwrap_or_default()))?;

        if changed == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let row = self
            .conn
            .query_row(
                &format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_author_row,
            )
            .optional()?;
        row.map(checked_author).transpose()
    }

    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        let row = self
            .conn
            .query_row(
                &format!("{AUTHOR_SELECT_SQL} WHERE name = ?1;"),
                [name],
                read_author_row,
            )
            .optional()?;
        row.map(checked_author).transpose()
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(checked_author(read_author_row(row)?)?);
        }
        Ok(authors)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn read_author_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn checked_author(author: Author) -> RepoResult<Author> {
    author.validate().map_err(|err| {
        RepoError::InvalidData(format!("authors row {}: {err}", author.id))
    })?;
    Ok(author)
}

fn name_conflict_or(err: rusqlite::Error, name: &str) -> RepoError {
    if is_unique_violation(&err) {
        return RepoError::Validation(ValidationError::NameTaken(name.to_string()));
    }
    err.into()
}

fn not_found(id: AuthorId) -> RepoError {
    RepoError::NotFound {
        entity: "author",
        id,
    }
}
