use crate::error::ServiceError;
use crate::services::claims::list_claims;
use crate::services::food_listings::list_food_listings;
use crate::services::providers::list_providers;
use crate::services::receivers::list_receivers;
use common::model::claim::Claim;
use common::model::food_listing::FoodListing;
use common::model::provider::Provider;
use common::model::receiver::Receiver;
use rusqlite::Connection;

/// Every row of the four donation tables, each in insertion order.
///
/// Loaded fresh for every insights request; aggregations never see a stale copy.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub providers: Vec<Provider>,
    pub receivers: Vec<Receiver>,
    pub food_listings: Vec<FoodListing>,
    pub claims: Vec<Claim>,
}

impl Snapshot {
    pub fn load(conn: &Connection) -> Result<Self, ServiceError> {
        Ok(Self {
            providers: list_providers(conn)?,
            receivers: list_receivers(conn)?,
            food_listings: list_food_listings(conn)?,
            claims: list_claims(conn)?,
        })
    }

    /// True when at least one of the four tables has no rows.
    pub fn any_table_empty(&self) -> bool {
        self.providers.is_empty()
            || self.receivers.is_empty()
            || self.food_listings.is_empty()
            || self.claims.is_empty()
    }
}
