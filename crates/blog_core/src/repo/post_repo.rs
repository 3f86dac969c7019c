//! Post repository contract and SQLite implementation.
//!
//! # Invariants
//! - `category` is stored in its canonical spelling (`Fiction|Non-Fiction`).
//! - Read paths re-validate rows against the repository's `PostRules`.

use crate::model::post::{validate_category, NewPost, Post, PostChanges, PostId, PostRules};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    category,
    summary,
    created_at,
    updated_at
FROM posts";

const POST_COLUMNS: &[&str] = &[
    "id",
    "title",
    "content",
    "category",
    "summary",
    "created_at",
    "updated_at",
];

/// Repository interface for post persistence.
pub trait PostRepository {
    /// Inserts a validated draft and returns the storage-assigned id.
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    /// Applies present fields of `changes`; refreshes `updated_at`.
    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Returns all posts ordered by `id ASC`.
    fn list_posts(&self) -> RepoResult<Vec<Post>>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
    /// Rules every write and read of this repository is checked against.
    fn rules(&self) -> &PostRules;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
    rules: PostRules,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository with the default rule set.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::with_rules(conn, PostRules::default())
    }

    /// Constructs a repository that validates with `rules`.
    pub fn with_rules(conn: &'conn Connection, rules: PostRules) -> RepoResult<Self> {
        ensure_connection_ready(conn, "posts", POST_COLUMNS)?;
        Ok(Self { conn, rules })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        // Drafts may have been built under looser rules.
        post.validate(&self.rules)?;

        self.conn.execute(
            "INSERT INTO posts (title, content, category, summary)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                post.title(),
                post.content(),
                post.category().as_str(),
                post.summary(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()> {
        changes.validate(&self.rules)?;

        if changes.is_empty() {
            return match self.get_post(id)? {
                Some(_) => Ok(()),
                None => Err(not_found(id)),
            };
        }

        let (replace_summary, summary) = match changes.summary.as_ref() {
            Some(value) => (true, value.as_deref()),
            None => (false, None),
        };

        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = COALESCE(?1, title),
                content = COALESCE(?2, content),
                category = COALESCE(?3, category),
                summary = CASE WHEN ?4 = 1 THEN ?5 ELSE summary END,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?6;",
            params![
                changes.title.as_deref(),
                changes.content.as_deref(),
                changes.category.map(|category| category.as_str()),
                replace_summary,
                summary,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let row = self
            .conn
            .query_row(
                &format!("{POST_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_post_row,
            )
            .optional()?;
        row.map(|raw| self.checked_post(raw)).transpose()
    }

    fn list_posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(self.checked_post(read_post_row(row)?)?);
        }
        Ok(posts)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn rules(&self) -> &PostRules {
        &self.rules
    }
}

impl SqlitePostRepository<'_> {
    fn checked_post(&self, raw: PostRow) -> RepoResult<Post> {
        let category = validate_category(&raw.category).map_err(|err| {
            RepoError::InvalidData(format!("posts row {}: {err}", raw.id))
        })?;

        let post = Post {
            id: raw.id,
            title: raw.title,
            content: raw.content,
            category,
            summary: raw.summary,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        };
        post.validate(&self.rules)
            .map_err(|err| RepoError::InvalidData(format!("posts row {}: {err}", post.id)))?;
        Ok(post)
    }
}

/// Row shape before `category` is parsed.
struct PostRow {
    id: PostId,
    title: String,
    content: String,
    category: String,
    summary: Option<String>,
    created_at: i64,
    updated_at: i64,
}

fn read_post_row(row: &Row<'_>) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        category: row.get("category")?,
        summary: row.get("summary")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn not_found(id: PostId) -> RepoError {
    RepoError::NotFound { entity: "post", id }
}
