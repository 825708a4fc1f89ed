use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A batch of donated food available for claiming, as stored in `Food_Listings`.
///
/// `quantity` is the number of units still available. It only ever decreases
/// through claim approvals or an explicit operator update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodListing {
    pub food_id: i64,
    pub food_name: Option<String>,
    pub food_type: Option<String>,
    pub meal_type: Option<String>,
    pub quantity: Option<i64>,
    /// Raw stored text; listings written through the API always hold `YYYY-MM-DD`.
    pub expiry_date: Option<String>,
    pub provider_id: Option<i64>,
    pub provider_type: Option<String>,
    pub location: Option<String>,
}

/// Fields submitted when a listing is created or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodListingForm {
    pub food_name: String,
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub meal_type: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    #[serde(default)]
    pub provider_type: String,
    #[serde(default)]
    pub location: String,
}
