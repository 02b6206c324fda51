// src/db/catalogs.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct CatalogLinkRow {
    pub id: i64,
    pub label: String,
    /// JSON-encoded filter preset.
    pub preset: String,
    pub created_at: i64,
    pub revoked_at: Option<i64>,
}

fn from_row(r: &Row<'_>) -> rusqlite::Result<CatalogLinkRow> {
    Ok(CatalogLinkRow {
        id: r.get(0)?,
        label: r.get(1)?,
        preset: r.get(2)?,
        created_at: r.get(3)?,
        revoked_at: r.get(4)?,
    })
}

/// Insert a share link row (token_hash should be SHA-256 bytes).
pub fn insert_catalog_link(
    conn: &Connection,
    label: &str,
    token_hash: &[u8],
    preset: &str,
    created_at: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into catalog_links (label, token_hash, preset, created_at) values (?, ?, ?, ?)",
        params![label, token_hash, preset, created_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert catalog link failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Find an active (not revoked) link by token hash.
pub fn find_active_link_by_hash(
    conn: &Connection,
    token_hash: &[u8],
) -> Result<Option<CatalogLinkRow>, ServerError> {
    conn.query_row(
        "select id, label, preset, created_at, revoked_at
         from catalog_links
         where token_hash = ? and revoked_at is null",
        params![token_hash],
        from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select catalog link failed: {e}")))
}

pub fn list_catalog_links(conn: &Connection) -> Result<Vec<CatalogLinkRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, label, preset, created_at, revoked_at
             from catalog_links
             order by created_at desc, id desc",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut links = Vec::new();
    for r in rows {
        links.push(r?);
    }
    Ok(links)
}

/// Marks a link revoked. Revoking twice keeps the first timestamp.
pub fn revoke_catalog_link(conn: &Connection, id: i64, now: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update catalog_links set revoked_at = coalesce(revoked_at, ?) where id = ?",
            params![now, id],
        )
        .map_err(|e| ServerError::DbError(format!("revoke catalog link failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}
