//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `blog_core` linkage with deterministic output.
//! - Optionally open a database file and report row counts.
//!
//! Usage: `blog_cli [DB_PATH]`

use blog_core::db::open_db;
use blog_core::{
    AuthorRepository, PostRepository, SqliteAuthorRepository, SqlitePostRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("blog_core ping={}", blog_core::ping());
    println!("blog_core version={}", blog_core::core_version());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match summarize(&db_path) {
        Ok((authors, posts)) => {
            println!("blog_core authors={authors} posts={posts}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("blog_core error={err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(db_path: &str) -> Result<(usize, usize), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let authors = SqliteAuthorRepository::try_new(&conn)?.list_authors()?.len();
    let posts = SqlitePostRepository::try_new(&conn)?.list_posts()?.len();
    Ok((authors, posts))
}
