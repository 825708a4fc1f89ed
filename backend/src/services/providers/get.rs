//! Provider reads: the full table in insertion order, or one row by id.

use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::provider::Provider;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_PROVIDER: &str =
    "SELECT Provider_ID, Name, Type, Address, City, Contact FROM Providers";

/// Handler for `GET /api/providers`.
pub async fn process_list(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(list_providers(&conn)?))
}

/// Handler for `GET /api/providers/{provider_id}`.
pub async fn process(
    db: web::Data<Database>,
    provider_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(get_provider(&conn, provider_id.into_inner())?))
}

fn provider_from_row(row: &Row<'_>) -> rusqlite::Result<Provider> {
    Ok(Provider {
        provider_id: row.get(0)?,
        name: row.get(1)?,
        provider_type: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        contact: row.get(5)?,
    })
}

/// All providers, oldest first.
pub fn list_providers(conn: &Connection) -> Result<Vec<Provider>, ServiceError> {
    let mut stmt = conn.prepare(&format!("{SELECT_PROVIDER} ORDER BY rowid"))?;
    let providers = stmt
        .query_map([], provider_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(providers)
}

pub fn get_provider(conn: &Connection, provider_id: i64) -> Result<Provider, ServiceError> {
    conn.query_row(
        &format!("{SELECT_PROVIDER} WHERE Provider_ID = ?1"),
        params![provider_id],
        provider_from_row,
    )
    .optional()?
    .ok_or(ServiceError::NotFound {
        entity: "provider",
        id: provider_id,
    })
}
