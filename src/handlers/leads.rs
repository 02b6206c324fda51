use crate::db::{leads, properties};
use crate::domain::{LeadSource, LeadStatus, NewLead};
use crate::errors::ServerError;
use crate::filters::ALL;
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::{now, AppState, Form};
use crate::templates::pages::leads_page;
use tracing::info;

pub fn index(state: &AppState, query: &str) -> ResultResp {
    let filter = match Form::parse(query).optional("status") {
        None => None,
        Some(s) if s == ALL => None,
        Some(s) => Some(
            s.parse::<LeadStatus>()
                .map_err(|e| ServerError::BadRequest(e.to_string()))?,
        ),
    };

    let leads = state.db.with_conn(|conn| leads::list_leads(conn, filter))?;
    html_response(leads_page(&leads, filter))
}

pub fn create(state: &AppState, form: &Form) -> ResultResp {
    let lead = NewLead {
        name: form.text("name"),
        email: form.text("email"),
        phone: form.optional("phone"),
        source: form.parse_or("source", LeadSource::Website)?,
        property_id: form.optional("property_id"),
        notes: form.optional("notes"),
    }
    .normalized()
    .map_err(ServerError::BadRequest)?;

    let id = state.db.with_conn(|conn| {
        if let Some(property_id) = &lead.property_id {
            if properties::get_property(conn, property_id)?.is_none() {
                return Err(ServerError::BadRequest(format!(
                    "unknown property: {property_id}"
                )));
            }
        }
        leads::insert_lead(conn, &lead, now())
    })?;

    info!(lead_id = id, source = %lead.source, "captured lead");
    redirect("/leads")
}

pub fn update_status(state: &AppState, id: i64, form: &Form) -> ResultResp {
    let status: LeadStatus = form.required("status")?;
    state
        .db
        .with_conn(|conn| leads::update_lead_status(conn, id, status, now()))?;

    info!(lead_id = id, status = %status, "lead moved");
    redirect("/leads")
}

/// The score is whatever the agent types in. Nothing computes it.
pub fn update_score(state: &AppState, id: i64, form: &Form) -> ResultResp {
    let score: i64 = form.required("score")?;
    state
        .db
        .with_conn(|conn| leads::update_lead_score(conn, id, score, now()))?;

    redirect("/leads")
}
