use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::claim::{Claim, ClaimOverview, ClaimStatus};
use log::warn;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_CLAIM: &str = "SELECT Claim_ID, Food_ID, Receiver_ID, Status, Timestamp FROM Claims";

/// Handler for `GET /api/claims`.
pub async fn process_list(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(list_claims(&conn)?))
}

/// Handler for `GET /api/claims/overview`.
pub async fn process_overview(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(list_claim_overviews(&conn)?))
}

/// Handler for `GET /api/claims/{claim_id}`.
pub async fn process(
    db: web::Data<Database>,
    claim_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(get_claim(&conn, claim_id.into_inner())?))
}

/// Reads a stored status name, failing the row on anything outside the lifecycle.
fn status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<ClaimStatus> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn claim_from_row(row: &Row<'_>) -> rusqlite::Result<Claim> {
    Ok(Claim {
        claim_id: row.get(0)?,
        food_id: row.get(1)?,
        receiver_id: row.get(2)?,
        status: status_at(row, 3)?,
        timestamp: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

/// Keeps the rows whose status parsed. A row with an unrecognised status is
/// logged and left out; any other read failure aborts the listing.
fn known_statuses<T, I>(rows: I) -> Result<Vec<T>, ServiceError>
where
    I: IntoIterator<Item = rusqlite::Result<(i64, rusqlite::Result<T>)>>,
{
    let mut kept = Vec::new();
    for row in rows {
        let (claim_id, parsed) = row?;
        match parsed {
            Ok(value) => kept.push(value),
            Err(e @ rusqlite::Error::FromSqlConversionFailure(..)) => {
                warn!("Skipping claim {}: {}", claim_id, e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(kept)
}

/// Every claim in insertion order, minus rows whose stored status is not a
/// lifecycle status (for example text loaded from an outside data set).
pub fn list_claims(conn: &Connection) -> Result<Vec<Claim>, ServiceError> {
    let mut stmt = conn.prepare(&format!("{SELECT_CLAIM} ORDER BY rowid"))?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, claim_from_row(row))))?;
    known_statuses(rows)
}

pub fn get_claim(conn: &Connection, claim_id: i64) -> Result<Claim, ServiceError> {
    conn.query_row(
        &format!("{SELECT_CLAIM} WHERE Claim_ID = ?1"),
        params![claim_id],
        claim_from_row,
    )
    .optional()?
    .ok_or(ServiceError::NotFound {
        entity: "claim",
        id: claim_id,
    })
}

/// Claims joined with their receiver and listing. Claims whose receiver or
/// listing no longer exists, or whose status is unrecognised, are left out.
pub fn list_claim_overviews(conn: &Connection) -> Result<Vec<ClaimOverview>, ServiceError> {
    let mut stmt = conn.prepare(
        "SELECT c.Claim_ID, r.Name, r.City, f.Food_Name, f.Food_Type, f.Quantity, \
                c.Status, c.Timestamp \
         FROM Claims c \
         JOIN Receivers r ON c.Receiver_ID = r.Receiver_ID \
         JOIN Food_Listings f ON c.Food_ID = f.Food_ID \
         ORDER BY c.rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        let overview = status_at(row, 6).and_then(|status| {
            Ok(ClaimOverview {
                claim_id: row.get(0)?,
                receiver_name: row.get(1)?,
                receiver_city: row.get(2)?,
                food_name: row.get(3)?,
                food_type: row.get(4)?,
                available_quantity: row.get(5)?,
                status,
                timestamp: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
            })
        });
        Ok((row.get::<_, i64>(0)?, overview))
    })?;
    known_statuses(rows)
}
