// src/db/leads.rs
use crate::domain::{Lead, LeadStatus, NewLead};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use time::OffsetDateTime;

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, email, phone, source, status, score, property_id, notes, created_at
    FROM leads
"#;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Lead> {
    Ok(Lead {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        source: row.get(4)?,
        status: row.get(5)?,
        score: row.get(6)?,
        property_id: row.get(7)?,
        notes: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// Stores a captured lead with status `new` and returns its id.
pub fn insert_lead(conn: &Connection, lead: &NewLead, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO leads (name, email, phone, source, status, score, property_id, notes, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?8, ?8)
        "#,
        params![
            &lead.name,
            &lead.email,
            &lead.phone,
            lead.source,
            LeadStatus::New,
            &lead.property_id,
            &lead.notes,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_lead(conn: &Connection, id: i64) -> Result<Option<Lead>, ServerError> {
    conn.query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("load lead failed: {e}")))
}

/// Newest first, optionally restricted to one pipeline stage.
pub fn list_leads(conn: &Connection, status: Option<LeadStatus>) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_COLUMNS} WHERE (?1 IS NULL OR status = ?1) ORDER BY created_at DESC, id DESC"
        ))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![status], from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut leads = Vec::new();
    for r in rows {
        leads.push(r?);
    }
    Ok(leads)
}

/// Leads interested in a given property.
pub fn list_leads_for_property(conn: &Connection, property_id: &str) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_COLUMNS} WHERE property_id = ?1 ORDER BY created_at DESC, id DESC"
        ))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![property_id], from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut leads = Vec::new();
    for r in rows {
        leads.push(r?);
    }
    Ok(leads)
}

pub fn update_lead_status(
    conn: &Connection,
    id: i64,
    status: LeadStatus,
    now: i64,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "UPDATE leads SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status, now, id],
        )
        .map_err(|e| ServerError::DbError(format!("update lead status failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn update_lead_score(conn: &Connection, id: i64, score: i64, now: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "UPDATE leads SET score = ?1, updated_at = ?2 WHERE id = ?3",
            params![score, now, id],
        )
        .map_err(|e| ServerError::DbError(format!("update lead score failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Per-status counts, in pipeline order, for the dashboard.
pub fn count_leads_by_status(conn: &Connection) -> Result<Vec<(LeadStatus, i64)>, ServerError> {
    let mut out = Vec::with_capacity(LeadStatus::ALL.len());
    for status in LeadStatus::ALL {
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM leads WHERE status = ?1",
                params![status],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("count leads failed: {e}")))?;
        out.push((*status, n));
    }
    Ok(out)
}

/// Counts leads captured in the current calendar month (UTC).
pub fn count_leads_this_month(conn: &Connection, now: i64) -> Result<i64, ServerError> {
    let dt = OffsetDateTime::from_unix_timestamp(now).unwrap_or_else(|_| OffsetDateTime::now_utc());

    // Day 1 is valid for every month
    let start_of_month = dt
        .replace_day(1)
        .unwrap_or(dt)
        .replace_time(time::Time::MIDNIGHT)
        .unix_timestamp();

    conn.query_row(
        "SELECT COUNT(*) FROM leads WHERE created_at >= ?1",
        params![start_of_month],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("count leads this month failed: {e}")))
}
