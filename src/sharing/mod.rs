// src/sharing/mod.rs
//! Public catalog links: an unguessable token in the URL, only its hash stored.

pub mod token;

use crate::db::catalogs as db_catalogs;
use crate::errors::ServerError;
use crate::filters::FilterQuery;
use rusqlite::Connection;
use tracing::{info, warn};
use url::Url;

use token::{generate_share_token, hash_token};

/// Path prefix under which shared catalogs are served.
pub const SHARE_PATH: &str = "/c";

#[derive(Debug, Clone)]
pub struct IssuedShareLink {
    pub id: i64,
    pub label: String,
    /// Raw token (never stored).
    pub token: String,
    /// Absolute URL to hand out.
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedShareLink {
    pub id: i64,
    pub label: String,
    pub preset: FilterQuery,
}

pub struct ShareLinkService {
    base_url: Url,
}

impl ShareLinkService {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn build_url(&self, token: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{SHARE_PATH}/{token}"));
        url.set_query(None);
        url.to_string()
    }

    /// Issue a link for a labelled catalog with a filter preset.
    /// Page numbers are never part of a preset.
    pub fn issue(
        &self,
        conn: &Connection,
        label: &str,
        preset: &FilterQuery,
        now: i64,
    ) -> Result<IssuedShareLink, ServerError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ServerError::BadRequest("label is required".into()));
        }

        let preset = FilterQuery {
            page: None,
            ..preset.clone()
        };
        let preset_json =
            serde_json::to_string(&preset).map_err(|_| ServerError::InternalError)?;

        let token = generate_share_token();
        let id = db_catalogs::insert_catalog_link(conn, label, &hash_token(&token), &preset_json, now)?;

        info!(link_id = id, label, "issued catalog share link");

        Ok(IssuedShareLink {
            id,
            label: label.to_string(),
            url: self.build_url(&token),
            token,
        })
    }

    /// Unknown and revoked tokens both resolve to `NotFound`.
    pub fn resolve(conn: &Connection, token: &str) -> Result<ResolvedShareLink, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::NotFound);
        }

        let row = db_catalogs::find_active_link_by_hash(conn, &hash_token(token))?
            .ok_or(ServerError::NotFound)?;

        // unreadable presets fall back to an unfiltered catalog
        let preset = serde_json::from_str(&row.preset).unwrap_or_else(|e| {
            warn!(link_id = row.id, error = %e, "ignoring unreadable catalog preset");
            FilterQuery::default()
        });

        Ok(ResolvedShareLink {
            id: row.id,
            label: row.label,
            preset,
        })
    }
}
