use crate::db::Database;
use crate::error::ServiceError;
use crate::services::providers::get_provider;
use crate::services::{require_id, require_text};
use actix_web::{web, HttpResponse};
use common::model::food_listing::{FoodListing, FoodListingForm};
use log::info;
use rusqlite::{params, Connection};

use super::get::get_food_listing;

/// Handler for `POST /api/food_listings`.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<FoodListingForm>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let listing = create_food_listing(&conn, &payload)?;
    Ok(HttpResponse::Created().json(listing))
}

/// Field checks plus the owning provider's existence.
pub(super) fn validate(conn: &Connection, form: &FoodListingForm) -> Result<(), ServiceError> {
    require_text("food name", &form.food_name)?;
    if form.quantity < 1 {
        return Err(ServiceError::validation("quantity must be at least 1"));
    }
    require_id("provider id", form.provider_id)?;
    get_provider(conn, form.provider_id)?;
    Ok(())
}

pub fn create_food_listing(
    conn: &Connection,
    form: &FoodListingForm,
) -> Result<FoodListing, ServiceError> {
    validate(conn, form)?;
    conn.execute(
        "INSERT INTO Food_Listings \
         (Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            form.food_name,
            form.quantity,
            form.expiry_date.to_string(),
            form.provider_id,
            form.provider_type,
            form.location,
            form.food_type,
            form.meal_type
        ],
    )?;
    let food_id = conn.last_insert_rowid();
    info!(
        "Food listing {} created: {} x{} from provider {}",
        food_id,
        form.food_name,
        form.quantity,
        form.provider_id
    );
    get_food_listing(conn, food_id)
}
