use common::model::food_listing::FoodListing;
use common::requests::InsightFilter;
use std::collections::HashSet;

use super::snapshot::Snapshot;

/// Listings matching every set field of `filter`, in snapshot order.
///
/// - `city` keeps listings whose provider is located in that city.
/// - `provider` keeps listings of the first provider carrying that name; an
///   unknown name filters nothing.
/// - `food_type` and `meal_type` are exact matches.
pub fn filter_listings<'a>(
    snapshot: &'a Snapshot,
    filter: &InsightFilter,
) -> Vec<&'a FoodListing> {
    let providers_in_city: Option<HashSet<i64>> = filter.city().map(|city| {
        snapshot
            .providers
            .iter()
            .filter(|p| p.city.as_deref() == Some(city))
            .map(|p| p.provider_id)
            .collect()
    });

    let named_provider: Option<i64> = filter.provider().and_then(|name| {
        snapshot
            .providers
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .map(|p| p.provider_id)
    });

    snapshot
        .food_listings
        .iter()
        .filter(|listing| match &providers_in_city {
            Some(ids) => listing.provider_id.is_some_and(|id| ids.contains(&id)),
            None => true,
        })
        .filter(|listing| match named_provider {
            Some(id) => listing.provider_id == Some(id),
            None => true,
        })
        .filter(|listing| match filter.food_type() {
            Some(food_type) => listing.food_type.as_deref() == Some(food_type),
            None => true,
        })
        .filter(|listing| match filter.meal_type() {
            Some(meal_type) => listing.meal_type.as_deref() == Some(meal_type),
            None => true,
        })
        .collect()
}
