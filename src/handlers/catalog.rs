// src/handlers/catalog.rs
//! Shared catalogs: link management for agents and the public view behind a link.

use crate::db::{catalogs, leads, properties};
use crate::domain::{LeadSource, NewLead};
use crate::errors::ServerError;
use crate::filters::{paginate, FilterQuery, FilterScope};
use crate::handlers::{active_query, mount_filtered};
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::{now, AppState, Form};
use crate::sharing::{ShareLinkService, SHARE_PATH};
use crate::templates::pages::{catalog_links_page, catalog_page, CatalogVm};
use tracing::info;

pub fn links(state: &AppState) -> ResultResp {
    let links = state.db.with_conn(|conn| catalogs::list_catalog_links(conn))?;
    html_response(catalog_links_page(&links, None))
}

/// Creates a link and answers with the list, the new URL shown this once.
pub fn issue(state: &AppState, form: &Form) -> ResultResp {
    let preset = FilterQuery::from_pairs(form.pairs());

    let (issued, links) = state.db.with_conn(|conn| {
        let issued = state
            .share_links
            .issue(conn, &form.text("label"), &preset, now())?;
        Ok((issued, catalogs::list_catalog_links(conn)?))
    })?;

    html_response(catalog_links_page(&links, Some(&issued)))
}

pub fn revoke(state: &AppState, id: i64) -> ResultResp {
    state
        .db
        .with_conn(|conn| catalogs::revoke_catalog_link(conn, id, now()))?;

    info!(link_id = id, "revoked catalog share link");
    redirect("/catalog/links")
}

/// The preset narrows the publicly listed properties first, the visitor's query
/// is applied on top of it.
pub fn public(state: &AppState, token: &str, query: &str) -> ResultResp {
    let (link, listed) = state.db.with_conn(|conn| {
        let link = ShareLinkService::resolve(conn, token)?;
        Ok((link, properties::list_public_properties(conn)?))
    })?;

    let visitor = FilterQuery::parse(query);
    let mut scope = FilterScope::new();
    mount_filtered(&mut scope, listed, &[&link.preset, &visitor])?;
    let store = scope.store()?;

    let page = paginate(
        store.filtered_properties(),
        visitor.page.unwrap_or(1),
        state.config.page_size,
    );

    html_response(catalog_page(&CatalogVm {
        token,
        label: &link.label,
        state: store.state(),
        page,
        query: active_query(store),
        inquiry_sent: Form::parse(query).optional("sent").is_some(),
    }))
}

/// Records a visitor's interest in one of the catalog's properties as a lead.
pub fn inquiry(state: &AppState, token: &str, form: &Form) -> ResultResp {
    let property_id = form
        .optional("property_id")
        .ok_or_else(|| ServerError::BadRequest("property_id is required".into()))?;

    let lead = NewLead {
        name: form.text("name"),
        email: form.text("email"),
        phone: form.optional("phone"),
        source: LeadSource::Catalog,
        property_id: Some(property_id.clone()),
        notes: form.optional("message"),
    }
    .normalized()
    .map_err(ServerError::BadRequest)?;

    let (link_id, lead_id) = state.db.with_conn(|conn| {
        let link = ShareLinkService::resolve(conn, token)?;

        // the preset bounds the catalog; visitor filters only narrow it
        let mut scope = FilterScope::new();
        mount_filtered(
            &mut scope,
            properties::list_public_properties(conn)?,
            &[&link.preset],
        )?;
        let listed = scope
            .store()?
            .filtered_properties()
            .iter()
            .any(|p| p.id == property_id);
        if !listed {
            return Err(ServerError::BadRequest(format!(
                "property {property_id} is not in this catalog"
            )));
        }

        Ok((link.id, leads::insert_lead(conn, &lead, now())?))
    })?;

    info!(link_id, lead_id, property_id = %property_id, "catalog inquiry received");
    redirect(&format!("{SHARE_PATH}/{token}?sent=1"))
}
