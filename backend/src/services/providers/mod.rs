//! # Provider Service
//!
//! CRUD endpoints for the `Providers` table under `/api/providers`.
//!
//! - `GET /`: every provider in insertion order.
//! - `GET /{provider_id}`: one provider, `404` when missing.
//! - `POST /`: create from a `ProviderForm`, returns the stored row with its generated id.
//! - `PUT /{provider_id}`: replace all descriptive fields.
//! - `DELETE /{provider_id}`: remove the row. Listings that reference it are left untouched.

mod create;
mod delete;
mod get;
mod update;

pub use get::{get_provider, list_providers};

#[cfg(test)]
pub use {create::create_provider, delete::delete_provider, update::update_provider};

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/providers";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process_list))
        .route("", post().to(create::process))
        .route("/{provider_id}", get().to(get::process))
        .route("/{provider_id}", put().to(update::process))
        .route("/{provider_id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::error::ServiceError;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App};
    use common::model::provider::{Provider, ProviderForm};

    fn form(name: &str, city: &str) -> ProviderForm {
        ProviderForm {
            name: name.to_string(),
            provider_type: "Restaurant".to_string(),
            address: "12 Market St".to_string(),
            city: city.to_string(),
            contact: "+1 555 0100".to_string(),
        }
    }

    #[test]
    fn create_then_read_returns_same_fields() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        let created = create_provider(&conn, &form("Green Bistro", "Springfield")).unwrap();
        let fetched = get_provider(&conn, created.provider_id).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name.as_deref(), Some("Green Bistro"));
        assert_eq!(fetched.provider_type.as_deref(), Some("Restaurant"));
        assert_eq!(fetched.address.as_deref(), Some("12 Market St"));
        assert_eq!(fetched.city.as_deref(), Some("Springfield"));
        assert_eq!(fetched.contact.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn surrounding_spaces_survive_the_round_trip() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        let created = create_provider(&conn, &form(" Green Bistro ", "Springfield")).unwrap();
        let fetched = get_provider(&conn, created.provider_id).unwrap();
        assert_eq!(fetched.name.as_deref(), Some(" Green Bistro "));

        let updated = update_provider(&conn, created.provider_id, &form("  Bistro", "A")).unwrap();
        assert_eq!(updated.name.as_deref(), Some("  Bistro"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        let err = create_provider(&conn, &form("  ", "Springfield")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(list_providers(&conn).unwrap().is_empty());
    }

    #[test]
    fn update_and_delete_missing_provider_is_not_found() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        let err = update_provider(&conn, 42, &form("Ghost", "Nowhere")).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 42, .. }));
        let err = delete_provider(&conn, 42).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 42, .. }));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let (_dir, db) = temp_database();
        let conn = db.connect().unwrap();

        create_provider(&conn, &form("First", "A")).unwrap();
        create_provider(&conn, &form("Second", "B")).unwrap();
        let updated = update_provider(&conn, 1, &form("First Renamed", "C")).unwrap();
        assert_eq!(updated.city.as_deref(), Some("C"));

        let names: Vec<_> = list_providers(&conn)
            .unwrap()
            .into_iter()
            .map(|p| p.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["First Renamed", "Second"]);
    }

    #[actix_web::test]
    async fn http_crud_cycle() {
        let (_dir, db) = temp_database();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/providers")
            .set_json(form("Harvest Kitchen", "Lakeside"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Provider = actix_test::read_body_json(resp).await;

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/providers/{}", created.provider_id))
            .to_request();
        let fetched: Provider = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/providers/{}", created.provider_id))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/providers/{}", created.provider_id))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
