//! HTTP services of the donation tracker.
//!
//! - `providers`, `receivers`, `food_listings`: plain CRUD over one table each.
//! - `claims`: CRUD plus the status transition that reserves listing stock.
//! - `insights`: read-only aggregates over a snapshot of all four tables.

pub mod claims;
pub mod food_listings;
pub mod insights;
pub mod providers;
pub mod receivers;

use crate::error::ServiceError;

/// Rejects blank required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Rejects non-positive identifiers before they reach the store.
pub(crate) fn require_id(field: &str, value: i64) -> Result<(), ServiceError> {
    if value < 1 {
        return Err(ServiceError::validation(format!(
            "{field} must be a positive identifier"
        )));
    }
    Ok(())
}

/// Maps "no row touched" to `NotFound` for update and delete statements.
pub(crate) fn ensure_affected(
    affected: usize,
    entity: &'static str,
    id: i64,
) -> Result<(), ServiceError> {
    if affected == 0 {
        return Err(ServiceError::NotFound { entity, id });
    }
    Ok(())
}
