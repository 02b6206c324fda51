// src/handlers/properties.rs

use crate::backend::sync_properties;
use crate::db::{leads, properties, proposals};
use crate::domain::{NewProperty, PropertyStatus, PropertyType};
use crate::errors::ServerError;
use crate::filters::{paginate, FilterQuery, FilterScope};
use crate::handlers::{active_query, mount_filtered};
use crate::responses::{html_response, redirect, xlsx_response, ResultResp};
use crate::router::{now, AppState, Form};
use crate::sharing::token::generate_property_id;
use crate::spreadsheets::properties_workbook;
use crate::templates::pages::{properties_page, property_detail_page, PropertiesVm, PropertyDetailVm};
use tracing::info;

pub fn index(state: &AppState, query: &str) -> ResultResp {
    let filters = FilterQuery::parse(query);
    let all = state.db.with_conn(|conn| properties::list_properties(conn))?;

    let mut scope = FilterScope::new();
    mount_filtered(&mut scope, all, &[&filters])?;
    let store = scope.store()?;

    let page = paginate(
        store.filtered_properties(),
        filters.page.unwrap_or(1),
        state.config.page_size,
    );

    html_response(properties_page(&PropertiesVm {
        state: store.state(),
        page,
        query: active_query(store),
        backend_enabled: state.backend.is_some(),
    }))
}

/// Same filters as the list, every matching row, no pagination.
pub fn export(state: &AppState, query: &str) -> ResultResp {
    let filters = FilterQuery::parse(query);
    let all = state.db.with_conn(|conn| properties::list_properties(conn))?;

    let mut scope = FilterScope::new();
    mount_filtered(&mut scope, all, &[&filters])?;
    let store = scope.store()?;

    let rows = store.filtered_properties();
    let buffer = properties_workbook(rows)?;
    info!(rows = rows.len(), "exported properties");

    let filename = format!("properties_{}.xlsx", chrono::Utc::now().format("%Y%m%d"));
    xlsx_response(buffer, &filename)
}

pub fn create(state: &AppState, form: &Form) -> ResultResp {
    let new = NewProperty {
        title: form.text("title"),
        description: form.text("description"),
        address: form.text("address"),
        city: form.text("city"),
        state: form.text("state"),
        kind: form.parse_or("type", PropertyType::Apartment)?,
        status: form.parse_or("status", PropertyStatus::ForSale)?,
        bedrooms: form.parse_or("bedrooms", 0)?,
        bathrooms: form.parse_or("bathrooms", 0)?,
        price: form.required("price")?,
        area_m2: form.parse_optional("area_m2")?,
    };
    new.validate().map_err(ServerError::BadRequest)?;

    let now = now();
    let property = new.into_property(generate_property_id(), now);
    state
        .db
        .with_conn(|conn| properties::insert_property(conn, &property, now))?;

    info!(property_id = %property.id, "registered property");
    redirect(&format!("/properties/{}", property.id))
}

pub fn show(state: &AppState, id: &str) -> ResultResp {
    let vm = state.db.with_conn(|conn| {
        let property = properties::get_property(conn, id)?.ok_or(ServerError::NotFound)?;

        let proposals = proposals::list_proposals(conn)?
            .into_iter()
            .filter(|p| p.property_id == property.id)
            .collect();

        Ok(PropertyDetailVm {
            interested: leads::list_leads_for_property(conn, id)?,
            all_leads: leads::list_leads(conn, None)?,
            proposals,
            property,
        })
    })?;

    html_response(property_detail_page(&vm))
}

pub fn update_status(state: &AppState, id: &str, form: &Form) -> ResultResp {
    let status: PropertyStatus = form.required("status")?;
    state
        .db
        .with_conn(|conn| properties::update_property_status(conn, id, status, now()))?;

    info!(property_id = id, status = %status, "property status changed");
    redirect(&format!("/properties/{id}"))
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    state.db.with_conn(|conn| properties::delete_property(conn, id))?;
    info!(property_id = id, "deleted property");
    redirect("/properties")
}

pub fn sync(state: &AppState) -> ResultResp {
    let backend = state
        .backend
        .as_ref()
        .ok_or_else(|| ServerError::BadRequest("no backend is configured".into()))?;

    sync_properties(backend, &state.db, now())?;
    redirect("/properties")
}
