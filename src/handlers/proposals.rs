// src/handlers/proposals.rs

use crate::db::{leads, properties, proposals};
use crate::domain::{LeadStatus, NewProposal, ProposalStatus};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::{now, AppState, Form};
use crate::templates::pages::{proposal_page, proposals_page, ProposalVm};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

const DEFAULT_VALID_DAYS: u32 = 30;

fn today(now: i64) -> NaiveDate {
    DateTime::from_timestamp(now, 0)
        .unwrap_or_else(Utc::now)
        .date_naive()
}

pub fn index(state: &AppState) -> ResultResp {
    let proposals = state.db.with_conn(|conn| proposals::list_proposals(conn))?;
    html_response(proposals_page(&proposals))
}

/// Drafts a proposal and moves the lead to the proposal stage.
pub fn create(state: &AppState, form: &Form) -> ResultResp {
    let new = NewProposal {
        lead_id: form.required("lead_id")?,
        property_id: form.text("property_id"),
        offered_price: form.required("offered_price")?,
        down_payment: form.parse_or("down_payment", 0.0)?,
        installments: form.parse_or("installments", 1)?,
        valid_days: form.parse_or("valid_days", DEFAULT_VALID_DAYS)?,
        conditions: form.text("conditions"),
    };
    new.validate().map_err(ServerError::BadRequest)?;

    let now = now();
    let id = state.db.with_conn(|conn| {
        let lead = leads::get_lead(conn, new.lead_id)?
            .ok_or_else(|| ServerError::BadRequest(format!("unknown lead: {}", new.lead_id)))?;
        if properties::get_property(conn, &new.property_id)?.is_none() {
            return Err(ServerError::BadRequest(format!(
                "unknown property: {}",
                new.property_id
            )));
        }

        let tx = conn.transaction()?;
        let id = proposals::insert_proposal(&tx, &new, new.valid_until(today(now)), now)?;
        if !matches!(lead.status, LeadStatus::Won | LeadStatus::Lost) {
            leads::update_lead_status(&tx, lead.id, LeadStatus::Proposal, now)?;
        }
        tx.commit()?;
        Ok(id)
    })?;

    info!(proposal_id = id, lead_id = new.lead_id, property_id = %new.property_id, "drafted proposal");
    redirect(&format!("/proposals/{id}"))
}

pub fn show(state: &AppState, id: i64) -> ResultResp {
    let vm = state.db.with_conn(|conn| {
        let proposal = proposals::get_proposal(conn, id)?.ok_or(ServerError::NotFound)?;
        let lead = leads::get_lead(conn, proposal.lead_id)?.ok_or(ServerError::NotFound)?;
        let property =
            properties::get_property(conn, &proposal.property_id)?.ok_or(ServerError::NotFound)?;

        Ok(ProposalVm {
            proposal,
            lead,
            property,
        })
    })?;

    html_response(proposal_page(&vm))
}

/// Applies a lifecycle move. Accepting wins the lead.
pub fn update_status(state: &AppState, id: i64, form: &Form) -> ResultResp {
    let next: ProposalStatus = form.required("status")?;
    let now = now();

    state.db.with_conn(|conn| {
        let proposal = proposals::get_proposal(conn, id)?.ok_or(ServerError::NotFound)?;
        if !proposal.status.can_become(next) {
            return Err(ServerError::BadRequest(format!(
                "a {} proposal cannot become {}",
                proposal.status, next
            )));
        }

        let tx = conn.transaction()?;
        proposals::update_proposal_status(&tx, id, next, now)?;
        if next == ProposalStatus::Accepted {
            leads::update_lead_status(&tx, proposal.lead_id, LeadStatus::Won, now)?;
        }
        tx.commit()?;
        Ok(())
    })?;

    info!(proposal_id = id, status = %next, "proposal status changed");
    redirect(&format!("/proposals/{id}"))
}
