use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use log::info;
use rusqlite::{params, Connection};

/// Handler for `DELETE /api/food_listings/{food_id}`.
pub async fn process(
    db: web::Data<Database>,
    food_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    delete_food_listing(&conn, food_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_food_listing(conn: &Connection, food_id: i64) -> Result<(), ServiceError> {
    let affected = conn.execute(
        "DELETE FROM Food_Listings WHERE Food_ID = ?1",
        params![food_id],
    )?;
    ensure_affected(affected, "food listing", food_id)?;
    info!("Food listing {} deleted", food_id);
    Ok(())
}
