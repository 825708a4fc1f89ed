use crate::db::Database;
use crate::error::ServiceError;
use crate::services::require_text;
use actix_web::{web, HttpResponse};
use common::model::receiver::{Receiver, ReceiverForm};
use log::info;
use rusqlite::{params, Connection};

use super::get::get_receiver;

/// Handler for `POST /api/receivers`.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<ReceiverForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let receiver = create_receiver(&conn, &payload)?;
    Ok(HttpResponse::Created().json(receiver))
}

pub(super) fn validate(form: &ReceiverForm) -> Result<(), ServiceError> {
    require_text("receiver name", &form.name)
}

pub fn create_receiver(conn: &Connection, form: &ReceiverForm) -> Result<Receiver, ServiceError> {
    validate(form)?;
    conn.execute(
        "INSERT INTO Receivers (Name, Type, City, Contact) VALUES (?1, ?2, ?3, ?4)",
        params![form.name, form.receiver_type, form.city, form.contact],
    )?;
    let receiver_id = conn.last_insert_rowid();
    info!("Receiver {} created ({})", receiver_id, form.name);
    get_receiver(conn, receiver_id)
}
