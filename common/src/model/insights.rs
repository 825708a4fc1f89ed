//! Aggregate views produced by the backend's read layer.
//!
//! Every type here is a plain snapshot-derived value; none of them carries state
//! back into the store.

use serde::{Deserialize, Serialize};

use crate::model::food_listing::FoodListing;
use crate::model::provider::Provider;
use crate::model::receiver::Receiver;

/// Number of rows sharing one key (a city, a food type, a day...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCount {
    pub key: String,
    pub count: u64,
}

/// Number of listings sharing a city and a food type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFoodTypeCount {
    pub city: String,
    pub food_type: String,
    pub count: u64,
}

/// Sum of available quantity per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyQuantity {
    pub key: String,
    pub quantity: i64,
}

/// A provider or receiver ranked by how many listings or claims it accounts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedParty {
    pub id: i64,
    pub name: Option<String>,
    pub total: u64,
}

/// A provider's or receiver's percentage of the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionShare {
    pub id: i64,
    pub name: Option<String>,
    pub total: u64,
    pub share_percent: f64,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_providers: u64,
    pub total_receivers: u64,
    pub total_food_listings: u64,
    pub total_claims: u64,
    /// Providers per city, largest first, at most fifteen entries.
    pub top_provider_cities: Vec<KeyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderInsights {
    pub by_city: Vec<KeyCount>,
    pub selected_city: Option<String>,
    pub in_selected_city: Vec<Provider>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverInsights {
    pub by_city: Vec<KeyCount>,
    pub selected_city: Option<String>,
    pub in_selected_city: Vec<Receiver>,
}

/// Headline counts over the filtered listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodKpis {
    /// Distinct providers owning at least one filtered listing.
    pub providers: u64,
    /// Distinct receivers holding a claim on at least one filtered listing,
    /// whatever its status. Not the size of the `Receivers` table.
    pub receivers: u64,
    pub food_listings: u64,
}

/// Everything the food insights page shows for one filter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodInsights {
    /// False when any of the four tables is empty; all other fields are then empty.
    pub available: bool,
    pub kpis: FoodKpis,
    pub listings: Vec<FoodListing>,
    pub food_type_distribution: Vec<KeyCount>,
    pub availability_by_city: Vec<CityFoodTypeCount>,
    pub top_providers: Vec<RankedParty>,
    pub top_receivers: Vec<RankedParty>,
    pub meal_type_popularity: Vec<KeyCount>,
    pub expiry_status: Vec<KeyCount>,
    pub claims_over_time: Vec<KeyCount>,
    pub most_wasted_food_types: Vec<KeyCount>,
    pub claims_by_city: Vec<KeyCount>,
    pub provider_shares: Vec<ContributionShare>,
    pub receiver_shares: Vec<ContributionShare>,
    pub listings_by_provider_type: Vec<KeyCount>,
    pub quantity_by_city: Vec<KeyQuantity>,
    pub quantity_by_food_type: Vec<KeyQuantity>,
}
