// src/db/proposals.rs
use crate::domain::{NewProposal, Proposal, ProposalStatus};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = r#"
    SELECT id, lead_id, property_id, offered_price, down_payment, installments,
           valid_until, conditions, status, created_at
    FROM proposals
"#;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Proposal> {
    Ok(Proposal {
        id: row.get(0)?,
        lead_id: row.get(1)?,
        property_id: row.get(2)?,
        offered_price: row.get(3)?,
        down_payment: row.get(4)?,
        installments: row.get(5)?,
        valid_until: row.get(6)?,
        conditions: row.get(7)?,
        status: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// Inserts a draft proposal and returns its id.
pub fn insert_proposal(
    conn: &Connection,
    proposal: &NewProposal,
    valid_until: NaiveDate,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO proposals (
            lead_id, property_id, offered_price, down_payment, installments,
            valid_until, conditions, status, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
        "#,
        params![
            proposal.lead_id,
            &proposal.property_id,
            proposal.offered_price,
            proposal.down_payment,
            proposal.installments,
            valid_until,
            proposal.conditions.trim(),
            ProposalStatus::Draft,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert proposal failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_proposal(conn: &Connection, id: i64) -> Result<Option<Proposal>, ServerError> {
    conn.query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("load proposal failed: {e}")))
}

pub fn list_proposals(conn: &Connection) -> Result<Vec<Proposal>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_proposal_status(
    conn: &Connection,
    id: i64,
    status: ProposalStatus,
    now: i64,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "UPDATE proposals SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status, now, id],
        )
        .map_err(|e| ServerError::DbError(format!("update proposal status failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn count_proposals_by_status(
    conn: &Connection,
    status: ProposalStatus,
) -> Result<i64, ServerError> {
    conn.query_row(
        "SELECT COUNT(*) FROM proposals WHERE status = ?1",
        params![status],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("count proposals failed: {e}")))
}
