use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use log::info;
use rusqlite::{params, Connection};

/// Handler for `DELETE /api/receivers/{receiver_id}`.
pub async fn process(
    db: web::Data<Database>,
    receiver_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    delete_receiver(&conn, receiver_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_receiver(conn: &Connection, receiver_id: i64) -> Result<(), ServiceError> {
    let affected = conn.execute(
        "DELETE FROM Receivers WHERE Receiver_ID = ?1",
        params![receiver_id],
    )?;
    ensure_affected(affected, "receiver", receiver_id)?;
    info!("Receiver {} deleted", receiver_id);
    Ok(())
}
