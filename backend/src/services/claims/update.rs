//! # Claim Status Transition
//!
//! `PUT /api/claims/{claim_id}/status` applies a new lifecycle status to one claim.
//!
//! Entering `Approved` from `Pending` or `Rejected` reserves one unit of the
//! claimed listing. The decrement and the status write share one immediate
//! transaction: either both are committed or neither is. Every other transition,
//! including re-saving an approved claim as `Approved`, writes the status only.
//!
//! Failures leave both rows exactly as they were:
//! - unknown claim: `NotFound`
//! - approval against a listing that no longer exists: `NotFound`
//! - approval against a listing with no units left: `InsufficientStock`

use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::claim::{Claim, ClaimStatus, ClaimStatusUpdate, ClaimTransition};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use super::get::get_claim;

/// Actix web handler for `PUT /api/claims/{claim_id}/status`.
///
/// # Arguments
/// * `claim_id` - Claim to move, taken from the URL path.
/// * `payload` - JSON body carrying the requested `status`.
///
/// # Returns
/// - `200 OK` with the `ClaimTransition` as JSON.
/// - `404 Not Found` for an unknown claim or a vanished listing.
/// - `409 Conflict` when approval finds no stock left.
pub async fn process(
    db: web::Data<Database>,
    claim_id: web::Path<i64>,
    payload: web::Json<ClaimStatusUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let mut conn = db.connect()?;
    let transition = set_claim_status(&mut conn, claim_id.into_inner(), payload.status)?;
    Ok(HttpResponse::Ok().json(transition))
}

/// Moves one claim to `new_status`, reserving a unit of its listing when the
/// claim newly enters `Approved`.
///
/// The claim read, the optional decrement and the status write all run in one
/// `BEGIN IMMEDIATE` transaction. Any error returns before `commit`, and dropping
/// the transaction rolls every write back.
///
/// # Arguments
/// * `conn` - Connection the transaction is opened on.
/// * `claim_id` - Claim to update.
/// * `new_status` - Target lifecycle status.
///
/// # Returns
/// The updated claim with its previous status and, when a unit was taken, the
/// quantity left on the listing. Fails with `NotFound` for an unknown claim or
/// listing and with `InsufficientStock` when the listing is empty.
pub fn set_claim_status(
    conn: &mut Connection,
    claim_id: i64,
    new_status: ClaimStatus,
) -> Result<ClaimTransition, ServiceError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let claim = get_claim(&tx, claim_id)?;
    let previous_status = claim.status;

    let remaining_quantity = if previous_status.enters_approval(new_status) {
        Some(reserve_unit(&tx, claim.food_id)?)
    } else {
        None
    };

    tx.execute(
        "UPDATE Claims SET Status = ?1 WHERE Claim_ID = ?2",
        params![new_status.as_str(), claim_id],
    )?;
    tx.commit()?;

    match remaining_quantity {
        Some(left) => info!(
            "Claim {} approved: food listing {} now has {} left",
            claim_id, claim.food_id, left
        ),
        None => info!(
            "Claim {} status {} -> {}",
            claim_id, previous_status, new_status
        ),
    }

    Ok(ClaimTransition {
        claim: Claim {
            status: new_status,
            ..claim
        },
        previous_status,
        stock_decremented: remaining_quantity.is_some(),
        remaining_quantity,
    })
}

/// Takes one unit from the listing inside `tx` and returns what is left.
fn reserve_unit(tx: &Transaction<'_>, food_id: i64) -> Result<i64, ServiceError> {
    let quantity: Option<i64> = tx
        .query_row(
            "SELECT Quantity FROM Food_Listings WHERE Food_ID = ?1",
            params![food_id],
            |row| row.get(0),
        )
        .optional()?
        .ok_or(ServiceError::NotFound {
            entity: "food listing",
            id: food_id,
        })?;

    let available = quantity.unwrap_or(0);
    if available <= 0 {
        warn!("Approval refused: food listing {} is out of stock", food_id);
        return Err(ServiceError::InsufficientStock { food_id });
    }

    let affected = tx.execute(
        "UPDATE Food_Listings SET Quantity = Quantity - 1 WHERE Food_ID = ?1 AND Quantity > 0",
        params![food_id],
    )?;
    if affected != 1 {
        return Err(ServiceError::InsufficientStock { food_id });
    }
    Ok(available - 1)
}
