// src/backend/mod.rs
mod rest;

pub use rest::RestBackend;

use crate::db::properties::upsert_properties;
use crate::db::Database;
use crate::domain::Property;
use crate::errors::ServerError;
use tracing::info;

/// Anything that can hand over a full property collection.
pub trait PropertySource {
    fn fetch_properties(&self) -> Result<Vec<Property>, ServerError>;
}

/// Pulls every property from `source` and upserts it locally in one transaction.
pub fn sync_properties(
    source: &dyn PropertySource,
    db: &Database,
    now: i64,
) -> Result<usize, ServerError> {
    let properties = source.fetch_properties()?;
    let written = db.with_conn(|conn| upsert_properties(conn, &properties, now))?;
    info!(written, "synced properties from backend");
    Ok(written)
}
