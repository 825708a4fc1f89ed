use crate::db::Database;
use crate::error::ServiceError;
use crate::services::ensure_affected;
use actix_web::{web, HttpResponse};
use common::model::food_listing::{FoodListing, FoodListingForm};
use log::info;
use rusqlite::{params, Connection};

use super::create::validate;
use super::get::get_food_listing;

/// Handler for `PUT /api/food_listings/{food_id}`.
pub async fn process(
    db: web::Data<Database>,
    food_id: web::Path<i64>,
    payload: web::Json<FoodListingForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let listing = update_food_listing(&conn, food_id.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(listing))
}

pub fn update_food_listing(
    conn: &Connection,
    food_id: i64,
    form: &FoodListingForm,
) -> Result<FoodListing, ServiceError> {
    validate(conn, form)?;
    let affected = conn.execute(
        "UPDATE Food_Listings SET Food_Name = ?1, Quantity = ?2, Expiry_Date = ?3, \
         Provider_ID = ?4, Provider_Type = ?5, Location = ?6, Food_Type = ?7, Meal_Type = ?8 \
         WHERE Food_ID = ?9",
        params![
            form.food_name,
            form.quantity,
            form.expiry_date.to_string(),
            form.provider_id,
            form.provider_type,
            form.location,
            form.food_type,
            form.meal_type,
            food_id
        ],
    )?;
    ensure_affected(affected, "food listing", food_id)?;
    info!("Food listing {} updated (quantity {})", food_id, form.quantity);
    get_food_listing(conn, food_id)
}
