//! # Food Insights
//!
//! `GET /api/insights/food` narrows the listings with an `InsightFilter` and
//! derives every food-page view from that selection in one pass over a fresh
//! snapshot. Claims-over-time covers all claims; every other view follows the filter.

use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use common::model::insights::{FoodInsights, FoodKpis};
use common::requests::InsightFilter;
use std::collections::{HashMap, HashSet};

use super::aggregate::{
    availability_by_city, claims_on, claims_over_time, contribution_shares, expiry_status,
    grouped_counts, most_wasted_food_types, quantity_by, top_parties, totals_by_id, value_counts,
};
use super::filters::filter_listings;
use super::snapshot::Snapshot;

const TOP_N: usize = 5;

/// Handler for `GET /api/insights/food`.
pub async fn process(
    db: web::Data<Database>,
    filter: web::Query<InsightFilter>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let snapshot = Snapshot::load(&conn)?;
    let today = Local::now().date_naive();
    Ok(HttpResponse::Ok().json(food_insights(&snapshot, &filter, today)))
}

pub fn food_insights(
    snapshot: &Snapshot,
    filter: &InsightFilter,
    today: NaiveDate,
) -> FoodInsights {
    if snapshot.any_table_empty() {
        return FoodInsights::default();
    }

    let listings = filter_listings(snapshot, filter);
    let food_ids: HashSet<i64> = listings.iter().map(|l| l.food_id).collect();
    let claims = claims_on(&snapshot.claims, &food_ids);

    let provider_names: HashMap<i64, Option<String>> = snapshot
        .providers
        .iter()
        .rev()
        .map(|p| (p.provider_id, p.name.clone()))
        .collect();
    let receiver_names: HashMap<i64, Option<String>> = snapshot
        .receivers
        .iter()
        .rev()
        .map(|r| (r.receiver_id, r.name.clone()))
        .collect();
    let receiver_cities: HashMap<i64, Option<&str>> = snapshot
        .receivers
        .iter()
        .rev()
        .map(|r| (r.receiver_id, r.city.as_deref()))
        .collect();

    let listings_per_provider = totals_by_id(listings.iter().filter_map(|l| l.provider_id));
    let claims_per_receiver = totals_by_id(claims.iter().map(|c| c.receiver_id));

    let claims_by_city = grouped_counts(
        snapshot
            .claims
            .iter()
            .map(|c| receiver_cities.get(&c.receiver_id).copied().flatten())
            .filter(|city| match filter.city() {
                Some(selected) => *city == Some(selected),
                None => true,
            }),
    );

    FoodInsights {
        available: true,
        kpis: FoodKpis {
            providers: listings_per_provider.len() as u64,
            receivers: claims_per_receiver.len() as u64,
            food_listings: listings.len() as u64,
        },
        food_type_distribution: value_counts(listings.iter().map(|l| l.food_type.as_deref())),
        availability_by_city: availability_by_city(&listings),
        top_providers: top_parties(&listings_per_provider, &provider_names, TOP_N),
        top_receivers: top_parties(&claims_per_receiver, &receiver_names, TOP_N),
        meal_type_popularity: value_counts(listings.iter().map(|l| l.meal_type.as_deref())),
        expiry_status: expiry_status(&listings, today),
        claims_over_time: claims_over_time(&snapshot.claims),
        most_wasted_food_types: most_wasted_food_types(&listings, today),
        claims_by_city,
        provider_shares: contribution_shares(&listings_per_provider, &provider_names),
        receiver_shares: contribution_shares(&claims_per_receiver, &receiver_names),
        listings_by_provider_type: grouped_counts(
            listings.iter().map(|l| l.provider_type.as_deref()),
        ),
        quantity_by_city: quantity_by(
            listings.iter().map(|l| (l.location.as_deref(), l.quantity)),
        ),
        quantity_by_food_type: quantity_by(
            listings.iter().map(|l| (l.food_type.as_deref(), l.quantity)),
        ),
        listings: listings.into_iter().cloned().collect(),
    }
}
