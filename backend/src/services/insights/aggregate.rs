//! Pure aggregations over snapshot rows.
//!
//! All functions are total: a missing grouping value (NULL column) skips the
//! row instead of failing, and empty input gives empty output. Orderings are
//! fixed so equal input always yields equal output:
//! - "count" views are largest first, ties broken by key;
//! - "grouped" views are ordered by key.

use chrono::{NaiveDate, NaiveDateTime};
use common::model::claim::Claim;
use common::model::food_listing::FoodListing;
use common::model::insights::{
    CityFoodTypeCount, ContributionShare, KeyCount, KeyQuantity, RankedParty,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Stand-in for a missing city on the provider and receiver pages.
pub const UNKNOWN_CITY: &str = "Unknown";

pub const EXPIRED: &str = "Expired";
pub const VALID: &str = "Valid";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

fn tally<'a, I>(keys: I) -> BTreeMap<&'a str, u64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = BTreeMap::new();
    for key in keys.into_iter().flatten() {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Occurrences per key, largest first.
pub fn value_counts<'a, I>(keys: I) -> Vec<KeyCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = grouped_counts(keys);
    // stable: equal counts keep key order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Occurrences per key, ordered by key.
pub fn grouped_counts<'a, I>(keys: I) -> Vec<KeyCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tally(keys)
        .into_iter()
        .map(|(key, count)| KeyCount {
            key: key.to_string(),
            count,
        })
        .collect()
}

/// Sum of quantities per key; rows without a key are skipped, missing quantities add nothing.
pub fn quantity_by<'a, I>(rows: I) -> Vec<KeyQuantity>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<i64>)>,
{
    let mut sums: BTreeMap<&str, i64> = BTreeMap::new();
    for (key, quantity) in rows {
        if let Some(key) = key {
            *sums.entry(key).or_insert(0) += quantity.unwrap_or(0);
        }
    }
    sums.into_iter()
        .map(|(key, quantity)| KeyQuantity {
            key: key.to_string(),
            quantity,
        })
        .collect()
}

/// Per-city counts for the provider/receiver pages; missing cities count as `Unknown`.
pub fn city_counts<'a, I>(cities: I) -> Vec<KeyCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    value_counts(
        cities
            .into_iter()
            .map(|city| Some(city.unwrap_or(UNKNOWN_CITY))),
    )
}

/// Sorted, de-duplicated, non-blank values.
pub fn distinct_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Listings per (city, food type), ordered by city then food type.
pub fn availability_by_city(listings: &[&FoodListing]) -> Vec<CityFoodTypeCount> {
    let mut counts: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for listing in listings {
        if let (Some(city), Some(food_type)) = (&listing.location, &listing.food_type) {
            *counts.entry((city.as_str(), food_type.as_str())).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|((city, food_type), count)| CityFoodTypeCount {
            city: city.to_string(),
            food_type: food_type.to_string(),
            count,
        })
        .collect()
}

/// Parses the date formats seen in donation exports; anything else is `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// True when the listing's expiry date parses and lies before `today`.
pub fn is_expired(listing: &FoodListing, today: NaiveDate) -> bool {
    listing
        .expiry_date
        .as_deref()
        .and_then(parse_calendar_date)
        .is_some_and(|date| date < today)
}

/// `Expired` / `Valid` counts. Unparseable or missing dates count as valid.
pub fn expiry_status(listings: &[&FoodListing], today: NaiveDate) -> Vec<KeyCount> {
    value_counts(listings.iter().map(|listing| {
        Some(if is_expired(listing, today) {
            EXPIRED
        } else {
            VALID
        })
    }))
}

/// Expired listings per food type.
pub fn most_wasted_food_types(listings: &[&FoodListing], today: NaiveDate) -> Vec<KeyCount> {
    grouped_counts(
        listings
            .iter()
            .filter(|listing| is_expired(listing, today))
            .map(|listing| listing.food_type.as_deref()),
    )
}

/// Claims per calendar day of their timestamp; unparseable timestamps are dropped.
pub fn claims_over_time(claims: &[Claim]) -> Vec<KeyCount> {
    let days: Vec<String> = claims
        .iter()
        .filter_map(|claim| parse_calendar_date(&claim.timestamp))
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();
    grouped_counts(days.iter().map(|d| Some(d.as_str())))
}

/// Totals per party id, ordered by id.
pub fn totals_by_id<I>(ids: I) -> BTreeMap<i64, u64>
where
    I: IntoIterator<Item = i64>,
{
    let mut totals = BTreeMap::new();
    for id in ids {
        *totals.entry(id).or_insert(0) += 1;
    }
    totals
}

/// The `limit` largest totals, ties broken by id, with names looked up in `names`.
pub fn top_parties(
    totals: &BTreeMap<i64, u64>,
    names: &HashMap<i64, Option<String>>,
    limit: usize,
) -> Vec<RankedParty> {
    let mut ranked: Vec<RankedParty> = totals
        .iter()
        .map(|(&id, &total)| RankedParty {
            id,
            name: names.get(&id).cloned().flatten(),
            total,
        })
        .collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(limit);
    ranked
}

/// Each party's percentage of the overall total, largest share first.
pub fn contribution_shares(
    totals: &BTreeMap<i64, u64>,
    names: &HashMap<i64, Option<String>>,
) -> Vec<ContributionShare> {
    let sum: u64 = totals.values().sum();
    let mut shares: Vec<ContributionShare> = totals
        .iter()
        .map(|(&id, &total)| ContributionShare {
            id,
            name: names.get(&id).cloned().flatten(),
            total,
            share_percent: if sum > 0 {
                total as f64 / sum as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    shares
}

/// Claims whose listing is among `food_ids`.
pub fn claims_on<'a>(claims: &'a [Claim], food_ids: &HashSet<i64>) -> Vec<&'a Claim> {
    claims
        .iter()
        .filter(|claim| food_ids.contains(&claim.food_id))
        .collect()
}
