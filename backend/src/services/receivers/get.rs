use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::receiver::Receiver;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_RECEIVER: &str = "SELECT Receiver_ID, Name, Type, City, Contact FROM Receivers";

/// Handler for `GET /api/receivers`.
pub async fn process_list(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(list_receivers(&conn)?))
}

/// Handler for `GET /api/receivers/{receiver_id}`.
pub async fn process(
    db: web::Data<Database>,
    receiver_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(get_receiver(&conn, receiver_id.into_inner())?))
}

fn receiver_from_row(row: &Row<'_>) -> rusqlite::Result<Receiver> {
    Ok(Receiver {
        receiver_id: row.get(0)?,
        name: row.get(1)?,
        receiver_type: row.get(2)?,
        city: row.get(3)?,
        contact: row.get(4)?,
    })
}

pub fn list_receivers(conn: &Connection) -> Result<Vec<Receiver>, ServiceError> {
    let mut stmt = conn.prepare(&format!("{SELECT_RECEIVER} ORDER BY rowid"))?;
    let receivers = stmt
        .query_map([], receiver_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(receivers)
}

pub fn get_receiver(conn: &Connection, receiver_id: i64) -> Result<Receiver, ServiceError> {
    conn.query_row(
        &format!("{SELECT_RECEIVER} WHERE Receiver_ID = ?1"),
        params![receiver_id],
        receiver_from_row,
    )
    .optional()?
    .ok_or(ServiceError::NotFound {
        entity: "receiver",
        id: receiver_id,
    })
}
