//! # Insights Service
//!
//! Read-only dashboard views under `/api/insights`. Each request loads a fresh
//! [`snapshot::Snapshot`] of the four tables and runs pure aggregations over it;
//! nothing here writes to the store or keeps state between requests.
//!
//! - `GET /overview`: table totals and the busiest provider cities.
//! - `GET /providers?city=`, `GET /receivers?city=`: per-city counts and the rows of one city.
//! - `GET /cities`: every known city, for filter choices.
//! - `GET /food?city=&provider=&food_type=&meal_type=`: the filtered food report.

mod aggregate;
mod filters;
mod food;
mod overview;
mod snapshot;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/insights";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/overview", get().to(overview::process))
        .route("/providers", get().to(overview::process_providers))
        .route("/receivers", get().to(overview::process_receivers))
        .route("/cities", get().to(overview::process_cities))
        .route("/food", get().to(food::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::services::claims::{create_claim, set_claim_status};
    use crate::services::food_listings::create_food_listing;
    use crate::services::providers::create_provider;
    use crate::services::receivers::create_receiver;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App};
    use chrono::NaiveDate;
    use common::model::claim::{ClaimStatus, NewClaim};
    use common::model::food_listing::FoodListingForm;
    use common::model::insights::{FoodInsights, Overview};
    use common::model::provider::ProviderForm;
    use common::model::receiver::ReceiverForm;

    #[actix_web::test]
    async fn reads_reflect_latest_writes() {
        let (_dir, db) = temp_database();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/insights/food")
            .to_request();
        let empty: FoodInsights = actix_test::call_and_read_body_json(&app, req).await;
        assert!(!empty.available);

        let mut conn = db.connect().unwrap();
        let provider_id = create_provider(
            &conn,
            &ProviderForm {
                name: "Spice Route".to_string(),
                provider_type: "Restaurant".to_string(),
                address: String::new(),
                city: "Ashford".to_string(),
                contact: String::new(),
            },
        )
        .unwrap()
        .provider_id;
        let receiver_id = create_receiver(
            &conn,
            &ReceiverForm {
                name: "Food Bank East".to_string(),
                receiver_type: "NGO".to_string(),
                city: "Ashford".to_string(),
                contact: String::new(),
            },
        )
        .unwrap()
        .receiver_id;
        let food_id = create_food_listing(
            &conn,
            &FoodListingForm {
                food_name: "Soup".to_string(),
                food_type: "Vegan".to_string(),
                meal_type: "Lunch".to_string(),
                quantity: 4,
                expiry_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
                provider_id,
                provider_type: "Restaurant".to_string(),
                location: "Ashford".to_string(),
            },
        )
        .unwrap()
        .food_id;
        let claim_id = create_claim(
            &conn,
            &NewClaim {
                food_id,
                receiver_id,
            },
        )
        .unwrap()
        .claim_id;
        set_claim_status(&mut conn, claim_id, ClaimStatus::Approved).unwrap();

        let req = actix_test::TestRequest::get()
            .uri("/api/insights/overview")
            .to_request();
        let overview: Overview = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(overview.total_providers, 1);
        assert_eq!(overview.total_claims, 1);

        let req = actix_test::TestRequest::get()
            .uri("/api/insights/food?city=Ashford&food_type=Vegan&meal_type=")
            .to_request();
        let food: FoodInsights = actix_test::call_and_read_body_json(&app, req).await;
        assert!(food.available);
        assert_eq!(food.kpis.food_listings, 1);
        assert_eq!(food.quantity_by_city[0].quantity, 3);
        assert_eq!(food.expiry_status[0].key, "Valid");

        let req = actix_test::TestRequest::get()
            .uri("/api/insights/cities")
            .to_request();
        let cities: Vec<String> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(cities, vec!["Ashford"]);
    }

    #[actix_web::test]
    async fn unrecognised_claim_status_does_not_break_views() {
        let (_dir, db) = temp_database();
        db.connect()
            .unwrap()
            .execute_batch(
                "INSERT INTO Providers (Name, Type, City) VALUES ('Bakery', 'Shop', 'Bree'); \
                 INSERT INTO Receivers (Name, Type, City) VALUES ('Shelter', 'NGO', 'Bree'); \
                 INSERT INTO Food_Listings (Food_Name, Quantity, Provider_ID, Location) \
                     VALUES ('Bread', 5, 1, 'Bree'); \
                 INSERT INTO Claims (Food_ID, Receiver_ID, Status) VALUES (1, 1, 'Pending'); \
                 INSERT INTO Claims (Food_ID, Receiver_ID, Status) VALUES (1, 1, 'Completed');",
            )
            .unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        for uri in [
            "/api/insights/overview",
            "/api/insights/cities",
            "/api/insights/providers",
            "/api/insights/food",
        ] {
            let req = actix_test::TestRequest::get().uri(uri).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }

        let req = actix_test::TestRequest::get()
            .uri("/api/insights/overview")
            .to_request();
        let overview: Overview = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(overview.total_providers, 1);
        assert_eq!(overview.total_claims, 1);
    }
}
