//! # Claim Service
//!
//! Endpoints for `Claims` under `/api/claims`.
//!
//! - `GET /`: every claim in insertion order.
//! - `GET /overview`: claims joined with receiver name/city and listing food/quantity.
//! - `GET /{claim_id}`: one claim.
//! - `POST /`: file a new `Pending` claim (`NewClaim`).
//! - `PUT /{claim_id}/status`: change the status; see `update` for the stock rules.
//! - `DELETE /{claim_id}`: remove a claim without restocking its listing.

mod create;
mod delete;
mod get;
mod update;

pub use get::list_claims;

#[cfg(test)]
pub use {
    create::create_claim,
    delete::delete_claim,
    get::{get_claim, list_claim_overviews},
    update::set_claim_status,
};

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/claims";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process_list))
        .route("", post().to(create::process))
        // Registered before `/{claim_id}` so the literal segment wins.
        .route("/overview", get().to(get::process_overview))
        .route("/{claim_id}", get().to(get::process))
        .route("/{claim_id}", delete().to(delete::process))
        .route("/{claim_id}/status", put().to(update::process))
}
