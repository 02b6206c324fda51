// src/db/properties.rs
use crate::domain::{Property, PropertyStatus};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, description, address, city, state, kind, status,
           bedrooms, bathrooms, price, area_m2, created_at
    FROM properties
"#;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        state: row.get(5)?,
        kind: row.get(6)?,
        status: row.get(7)?,
        bedrooms: row.get(8)?,
        bathrooms: row.get(9)?,
        price: row.get(10)?,
        area_m2: row.get(11)?,
        created_at: row.get(12)?,
    })
}

/// All properties, newest first.
/// This is the source collection handed to catalog views.
pub fn list_properties(conn: &Connection) -> Result<Vec<Property>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id"))
        .map_err(|e| ServerError::DbError(format!("prepare list properties failed: {e}")))?;

    let rows = stmt
        .query_map([], from_row)
        .map_err(|e| ServerError::DbError(format!("list properties failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Properties a public catalog may show.
pub fn list_public_properties(conn: &Connection) -> Result<Vec<Property>, ServerError> {
    Ok(list_properties(conn)?
        .into_iter()
        .filter(|p| p.status.is_publicly_listed())
        .collect())
}

pub fn get_property(conn: &Connection, id: &str) -> Result<Option<Property>, ServerError> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE id = ?1"),
        params![id],
        from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load property failed: {e}")))
}

pub fn insert_property(conn: &Connection, prop: &Property, now: i64) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO properties (
            id, title, description, address, city, state, kind, status,
            bedrooms, bathrooms, price, area_m2, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        "#,
        params![
            &prop.id,
            &prop.title,
            &prop.description,
            &prop.address,
            &prop.city,
            &prop.state,
            prop.kind,
            prop.status,
            prop.bedrooms,
            prop.bathrooms,
            prop.price,
            prop.area_m2,
            prop.created_at,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert property failed: {e}")))?;
    Ok(())
}

/// Inserts or refreshes a property keyed by its id.
/// The original `created_at` of an existing row is kept.
pub fn upsert_property(conn: &Connection, prop: &Property, now: i64) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO properties (
            id, title, description, address, city, state, kind, status,
            bedrooms, bathrooms, price, area_m2, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            address = excluded.address,
            city = excluded.city,
            state = excluded.state,
            kind = excluded.kind,
            status = excluded.status,
            bedrooms = excluded.bedrooms,
            bathrooms = excluded.bathrooms,
            price = excluded.price,
            area_m2 = excluded.area_m2,
            updated_at = excluded.updated_at
        "#,
        params![
            &prop.id,
            &prop.title,
            &prop.description,
            &prop.address,
            &prop.city,
            &prop.state,
            prop.kind,
            prop.status,
            prop.bedrooms,
            prop.bathrooms,
            prop.price,
            prop.area_m2,
            if prop.created_at > 0 { prop.created_at } else { now },
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert property failed: {e}")))?;
    Ok(())
}

/// Upserts a batch in one transaction; returns how many rows were written.
pub fn upsert_properties(
    conn: &mut Connection,
    props: &[Property],
    now: i64,
) -> Result<usize, ServerError> {
    let tx = conn.transaction()?;
    for prop in props {
        upsert_property(&tx, prop, now)?;
    }
    tx.commit()?;
    Ok(props.len())
}

pub fn update_property_status(
    conn: &Connection,
    id: &str,
    status: PropertyStatus,
    now: i64,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "UPDATE properties SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status, now, id],
        )
        .map_err(|e| ServerError::DbError(format!("update property status failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_property(conn: &Connection, id: &str) -> Result<(), ServerError> {
    let changed = conn
        .execute("DELETE FROM properties WHERE id = ?1", params![id])
        .map_err(|e| ServerError::DbError(format!("delete property failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn count_properties(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("SELECT COUNT(*) FROM properties", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count properties failed: {e}")))
}
