use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::food_listing::FoodListing;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_LISTING: &str = "SELECT Food_ID, Food_Name, Food_Type, Meal_Type, Quantity, \
     Expiry_Date, Provider_ID, Provider_Type, Location FROM Food_Listings";

/// Handler for `GET /api/food_listings`.
pub async fn process_list(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(list_food_listings(&conn)?))
}

/// Handler for `GET /api/food_listings/{food_id}`.
pub async fn process(
    db: web::Data<Database>,
    food_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    Ok(HttpResponse::Ok().json(get_food_listing(&conn, food_id.into_inner())?))
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<FoodListing> {
    Ok(FoodListing {
        food_id: row.get(0)?,
        food_name: row.get(1)?,
        food_type: row.get(2)?,
        meal_type: row.get(3)?,
        quantity: row.get(4)?,
        expiry_date: row.get(5)?,
        provider_id: row.get(6)?,
        provider_type: row.get(7)?,
        location: row.get(8)?,
    })
}

pub fn list_food_listings(conn: &Connection) -> Result<Vec<FoodListing>, ServiceError> {
    let mut stmt = conn.prepare(&format!("{SELECT_LISTING} ORDER BY rowid"))?;
    let listings = stmt
        .query_map([], listing_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(listings)
}

pub fn get_food_listing(conn: &Connection, food_id: i64) -> Result<FoodListing, ServiceError> {
    conn.query_row(
        &format!("{SELECT_LISTING} WHERE Food_ID = ?1"),
        params![food_id],
        listing_from_row,
    )
    .optional()?
    .ok_or(ServiceError::NotFound {
        entity: "food listing",
        id: food_id,
    })
}
