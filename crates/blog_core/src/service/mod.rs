//! Use-case services for authors and posts.
//!
//! # Responsibility
//! - Run field validators before delegating writes to repositories.
//! - Return persisted records read back from storage after writes.
//! - Emit metadata-only diagnostic events; field values are never logged.

use crate::repo::RepoResult;
use log::{info, warn};

pub mod author_service;
pub mod post_service;

fn log_outcome<T>(event: &'static str, result: &RepoResult<T>, id: Option<i64>) {
    let id = id.map_or_else(|| "none".to_string(), |value| value.to_string());
    match result {
        Ok(_) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => match err.as_validation() {
            Some(validation) => warn!(
                "event={event} module=service status=error error_code=validation_failed id={id} field={}",
                validation.field()
            ),
            None => warn!("event={event} module=service status=error id={id} error={err}"),
        },
    }
}
