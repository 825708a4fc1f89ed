use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use log::info;
use rusqlite::{params, Connection};

/// Handler for `DELETE /api/providers/{provider_id}`.
pub async fn process(
    db: web::Data<Database>,
    provider_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    delete_provider(&conn, provider_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_provider(conn: &Connection, provider_id: i64) -> Result<(), ServiceError> {
    let affected = conn.execute(
        "DELETE FROM Providers WHERE Provider_ID = ?1",
        params![provider_id],
    )?;
    ensure_affected(affected, "provider", provider_id)?;
    info!("Provider {} deleted", provider_id);
    Ok(())
}
