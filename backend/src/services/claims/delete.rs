use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use log::info;
use rusqlite::{params, Connection};

/// Handler for `DELETE /api/claims/{claim_id}`.
pub async fn process(
    db: web::Data<Database>,
    claim_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    delete_claim(&conn, claim_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Removes the claim row only. Units reserved by an approval are not returned.
pub fn delete_claim(conn: &Connection, claim_id: i64) -> Result<(), ServiceError> {
    let affected = conn.execute("DELETE FROM Claims WHERE Claim_ID = ?1", params![claim_id])?;
    ensure_affected(affected, "claim", claim_id)?;
    info!("Claim {} deleted", claim_id);
    Ok(())
}
