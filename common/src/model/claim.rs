//! Claim records and the status lifecycle they move through.
//!
//! A claim is created `Pending` and changes status only through the status
//! update operation on the backend. Entering `Approved` from any other status
//! reserves one unit of the claimed listing; nothing else touches stock.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a claim, stored as its variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }

    /// True when moving from `self` to `next` newly approves the claim.
    ///
    /// Re-saving an approved claim as `Approved` is not an approval entry.
    pub fn enters_approval(&self, next: ClaimStatus) -> bool {
        *self != ClaimStatus::Approved && next == ClaimStatus::Approved
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored or submitted status is not one of the three known names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClaimStatus(pub String);

impl fmt::Display for UnknownClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown claim status '{}'", self.0)
    }
}

impl std::error::Error for UnknownClaimStatus {}

impl FromStr for ClaimStatus {
    type Err = UnknownClaimStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            other => Err(UnknownClaimStatus(other.to_string())),
        }
    }
}

/// A stored row of the `Claims` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
    /// Server-assigned creation time (`YYYY-MM-DD HH:MM:SS`, UTC). Never rewritten.
    pub timestamp: String,
}

/// Payload for creating a claim. Status and timestamp are assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClaim {
    pub food_id: i64,
    pub receiver_id: i64,
}

/// Payload for the status update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimStatusUpdate {
    pub status: ClaimStatus,
}

/// Outcome of a successful status update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimTransition {
    pub claim: Claim,
    pub previous_status: ClaimStatus,
    /// Whether this call reserved one unit of the listing.
    pub stock_decremented: bool,
    /// Listing quantity after the call, when the listing was consulted.
    pub remaining_quantity: Option<i64>,
}

/// A claim joined with its receiver and listing, as shown on the claims view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOverview {
    pub claim_id: i64,
    pub receiver_name: Option<String>,
    pub receiver_city: Option<String>,
    pub food_name: Option<String>,
    pub food_type: Option<String>,
    pub available_quantity: Option<i64>,
    pub status: ClaimStatus,
    pub timestamp: String,
}
