//! # Claim Filing Service
//!
//! Backend logic for `POST /api/claims`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a `NewClaim` body naming a listing and a receiver.
//!
//! 2.  **Checks**: `create_claim` rejects non-positive ids, then looks up both rows so a claim
//!     can never point at a listing or receiver that does not exist.
//!
//! 3.  **Insert**: the claim is stored as `Pending` with SQLite's current time. Stock is not
//!     touched here; units are only reserved when the claim is approved.
//!
//! 4.  **HTTP Response**: `201 Created` with the stored claim, or the mapped `ServiceError`.

use crate::db::Database;
use crate::error::ServiceError;
use crate::services::food_listings::get_food_listing;
use crate::services::receivers::get_receiver;
use crate::services::require_id;
use actix_web::{web, HttpResponse};
use common::model::claim::{Claim, ClaimStatus, NewClaim};
use log::info;
use rusqlite::{params, Connection};

use super::get::get_claim;

/// Handler for `POST /api/claims`.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<NewClaim>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let claim = create_claim(&conn, &payload)?;
    Ok(HttpResponse::Created().json(claim))
}

/// Files a `Pending` claim against an existing listing for an existing receiver.
///
/// The timestamp is taken from SQLite's clock at insert time. Creating a claim
/// never touches the listing's quantity.
pub fn create_claim(conn: &Connection, new_claim: &NewClaim) -> Result<Claim, ServiceError> {
    require_id("food id", new_claim.food_id)?;
    require_id("receiver id", new_claim.receiver_id)?;
    get_food_listing(conn, new_claim.food_id)?;
    get_receiver(conn, new_claim.receiver_id)?;

    conn.execute(
        "INSERT INTO Claims (Food_ID, Receiver_ID, Status, Timestamp) \
         VALUES (?1, ?2, ?3, datetime('now'))",
        params![
            new_claim.food_id,
            new_claim.receiver_id,
            ClaimStatus::Pending.as_str()
        ],
    )?;
    let claim_id = conn.last_insert_rowid();
    info!(
        "Claim {} filed by receiver {} on food listing {}",
        claim_id, new_claim.receiver_id, new_claim.food_id
    );
    get_claim(conn, claim_id)
}
