use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use common::model::receiver::{Receiver, ReceiverForm};
use log::info;
use rusqlite::{params, Connection};

use super::create::validate;
use super::get::get_receiver;

/// Handler for `PUT /api/receivers/{receiver_id}`.
pub async fn process(
    db: web::Data<Database>,
    receiver_id: web::Path<i64>,
    payload: web::Json<ReceiverForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let receiver = update_receiver(&conn, receiver_id.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(receiver))
}

pub fn update_receiver(
    conn: &Connection,
    receiver_id: i64,
    form: &ReceiverForm,
) -> Result<Receiver, ServiceError> {
    validate(form)?;
    let affected = conn.execute(
        "UPDATE Receivers SET Name = ?1, Type = ?2, City = ?3, Contact = ?4 WHERE Receiver_ID = ?5",
        params![
            form.name,
            form.receiver_type,
            form.city,
            form.contact,
            receiver_id
        ],
    )?;
    ensure_affected(affected, "receiver", receiver_id)?;
    info!("Receiver {} updated", receiver_id);
    get_receiver(conn, receiver_id)
}
