//! # Food Listing Service
//!
//! CRUD endpoints for `Food_Listings` under `/api/food_listings`.
//!
//! A listing's `Quantity` is the stock that claim approvals draw from. Operators
//! may set it directly through an update (at least one unit); approvals lower it
//! one unit at a time through the claim service, never through this module.

mod create;
mod delete;
mod get;
mod update;

pub use get::{get_food_listing, list_food_listings};

#[cfg(test)]
pub use {
    create::create_food_listing, delete::delete_food_listing, update::update_food_listing,
};

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/food_listings";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process_list))
        .route("", post().to(create::process))
        .route("/{food_id}", get().to(get::process))
        .route("/{food_id}", put().to(update::process))
        .route("/{food_id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::error::ServiceError;
    use crate::services::providers::create_provider;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App};
    use chrono::NaiveDate;
    use common::model::food_listing::{FoodListing, FoodListingForm};
    use common::model::provider::ProviderForm;
    use rusqlite::Connection;

    fn seed_provider(conn: &Connection) -> i64 {
        create_provider(
            conn,
            &ProviderForm {
                name: "Corner Grocery".to_string(),
                provider_type: "Grocery Store".to_string(),
                address: "1 Main St".to_string(),
                city: "Ashford".to_string(),
                contact: "555-0101".to_string(),
            },
        )
        .unwrap()
        .provider_id
    }

    fn form(provider_id: i64, quantity: i64) -> FoodListingForm {
        FoodListingForm {
            food_name: "Bread".to_string(),
            food_type: "Vegetarian".to_string(),
            meal_type: "Breakfast".to_string(),
            quantity,
            expiry_date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
            provider_id,
            provider_type: "Grocery Store".to_string(),
            location: "Ashford".to_string(),
        }
    }

    #[test]
    fn create_then_read_returns_same_fields() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();
        let provider_id = seed_provider(&conn);

        let created = create_food_listing(&conn, &form(provider_id, 12)).unwrap();
        let fetched = get_food_listing(&conn, created.food_id).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.food_name.as_deref(), Some("Bread"));
        assert_eq!(fetched.food_type.as_deref(), Some("Vegetarian"));
        assert_eq!(fetched.meal_type.as_deref(), Some("Breakfast"));
        assert_eq!(fetched.quantity, Some(12));
        assert_eq!(fetched.expiry_date.as_deref(), Some("2025-03-17"));
        assert_eq!(fetched.provider_id, Some(provider_id));
        assert_eq!(fetched.provider_type.as_deref(), Some("Grocery Store"));
        assert_eq!(fetched.location.as_deref(), Some("Ashford"));
    }

    #[test]
    fn surrounding_spaces_survive_the_round_trip() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();
        let provider_id = seed_provider(&conn);

        let mut padded = form(provider_id, 2);
        padded.food_name = " Bread ".to_string();
        let created = create_food_listing(&conn, &padded).unwrap();
        assert_eq!(
            get_food_listing(&conn, created.food_id).unwrap().food_name.as_deref(),
            Some(" Bread ")
        );

        padded.food_name = "Rolls  ".to_string();
        let updated = update_food_listing(&conn, created.food_id, &padded).unwrap();
        assert_eq!(updated.food_name.as_deref(), Some("Rolls  "));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();
        let provider_id = seed_provider(&conn);

        for quantity in [0, -3] {
            let err = create_food_listing(&conn, &form(provider_id, quantity)).unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
        assert!(list_food_listings(&conn).unwrap().is_empty());
    }

    #[test]
    fn unknown_provider_is_not_found() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        let err = create_food_listing(&conn, &form(99, 4)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                entity: "provider",
                id: 99
            }
        ));
    }

    #[test]
    fn update_sets_quantity_and_expiry() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();
        let provider_id = seed_provider(&conn);
        let created = create_food_listing(&conn, &form(provider_id, 2)).unwrap();

        let mut changed = form(provider_id, 9);
        changed.expiry_date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let updated = update_food_listing(&conn, created.food_id, &changed).unwrap();

        assert_eq!(updated.quantity, Some(9));
        assert_eq!(updated.expiry_date.as_deref(), Some("2025-04-01"));
        delete_food_listing(&conn, created.food_id).unwrap();
        assert!(matches!(
            delete_food_listing(&conn, created.food_id),
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[actix_web::test]
    async fn http_create_and_list() {
        let (_dir, db) = temp_database();
        let provider_id = seed_provider(&db.connect().unwrap());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/food_listings")
            .set_json(form(provider_id, 5))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = actix_test::TestRequest::get()
            .uri("/api/food_listings")
            .to_request();
        let listings: Vec<FoodListing> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].quantity, Some(5));
    }
}
