use crate::db::Database;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::insights::{Overview, ProviderInsights, ReceiverInsights};
use common::model::provider::Provider;
use common::model::receiver::Receiver;
use common::requests::CityQuery;

use super::aggregate::{city_counts, distinct_sorted, UNKNOWN_CITY};
use super::snapshot::Snapshot;

const TOP_CITIES: usize = 15;

/// Handler for `GET /api/insights/overview`.
pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let snapshot = Snapshot::load(&conn)?;
    Ok(HttpResponse::Ok().json(overview(&snapshot)))
}

/// Handler for `GET /api/insights/providers`.
pub async fn process_providers(
    db: web::Data<Database>,
    query: web::Query<CityQuery>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let snapshot = Snapshot::load(&conn)?;
    Ok(HttpResponse::Ok().json(provider_insights(
        &snapshot.providers,
        query.city.as_deref(),
    )))
}

/// Handler for `GET /api/insights/receivers`.
pub async fn process_receivers(
    db: web::Data<Database>,
    query: web::Query<CityQuery>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let snapshot = Snapshot::load(&conn)?;
    Ok(HttpResponse::Ok().json(receiver_insights(
        &snapshot.receivers,
        query.city.as_deref(),
    )))
}

/// Handler for `GET /api/insights/cities`.
pub async fn process_cities(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let conn = db.connect()?;
    let snapshot = Snapshot::load(&conn)?;
    Ok(HttpResponse::Ok().json(city_options(&snapshot)))
}

pub fn overview(snapshot: &Snapshot) -> Overview {
    let mut top_provider_cities =
        city_counts(snapshot.providers.iter().map(|p| p.city.as_deref()));
    top_provider_cities.truncate(TOP_CITIES);
    Overview {
        total_providers: snapshot.providers.len() as u64,
        total_receivers: snapshot.receivers.len() as u64,
        total_food_listings: snapshot.food_listings.len() as u64,
        total_claims: snapshot.claims.len() as u64,
        top_provider_cities,
    }
}

/// The requested city, or the first row's city when none was asked for.
fn select_city(requested: Option<&str>, first_row_city: Option<Option<&str>>) -> Option<String> {
    requested
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .or_else(|| first_row_city.map(|c| c.unwrap_or(UNKNOWN_CITY).to_string()))
}

pub fn provider_insights(providers: &[Provider], city: Option<&str>) -> ProviderInsights {
    let selected_city = select_city(city, providers.first().map(|p| p.city.as_deref()));
    let in_selected_city = match &selected_city {
        Some(selected) => providers
            .iter()
            .filter(|p| p.city.as_deref().unwrap_or(UNKNOWN_CITY) == selected)
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    ProviderInsights {
        by_city: city_counts(providers.iter().map(|p| p.city.as_deref())),
        selected_city,
        in_selected_city,
    }
}

pub fn receiver_insights(receivers: &[Receiver], city: Option<&str>) -> ReceiverInsights {
    let selected_city = select_city(city, receivers.first().map(|r| r.city.as_deref()));
    let in_selected_city = match &selected_city {
        Some(selected) => receivers
            .iter()
            .filter(|r| r.city.as_deref().unwrap_or(UNKNOWN_CITY) == selected)
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    ReceiverInsights {
        by_city: city_counts(receivers.iter().map(|r| r.city.as_deref())),
        selected_city,
        in_selected_city,
    }
}

/// Every city known to any table, sorted and de-duplicated.
pub fn city_options(snapshot: &Snapshot) -> Vec<String> {
    distinct_sorted(
        snapshot
            .providers
            .iter()
            .map(|p| p.city.as_deref())
            .chain(snapshot.receivers.iter().map(|r| r.city.as_deref()))
            .chain(snapshot.food_listings.iter().map(|l| l.location.as_deref())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: i64, city: Option<&str>) -> Provider {
        Provider {
            provider_id: id,
            name: Some(format!("provider-{id}")),
            provider_type: None,
            address: None,
            city: city.map(str::to_string),
            contact: None,
        }
    }

    #[test]
    fn overview_caps_city_list() {
        let providers: Vec<Provider> = (0..20)
            .map(|i| provider(i, Some(&format!("City {i:02}"))))
            .collect();
        let snapshot = Snapshot {
            providers,
            ..Default::default()
        };

        let view = overview(&snapshot);
        assert_eq!(view.total_providers, 20);
        assert_eq!(view.total_claims, 0);
        assert_eq!(view.top_provider_cities.len(), TOP_CITIES);
        assert_eq!(view.top_provider_cities[0].key, "City 00");
    }

    #[test]
    fn provider_page_defaults_to_first_city() {
        let providers = vec![
            provider(1, Some("Bree")),
            provider(2, Some("Ashford")),
            provider(3, Some("Bree")),
            provider(4, None),
        ];

        let page = provider_insights(&providers, None);
        assert_eq!(page.selected_city.as_deref(), Some("Bree"));
        assert_eq!(page.in_selected_city.len(), 2);
        assert_eq!(page.by_city[0].key, "Bree");
        assert_eq!(page.by_city[0].count, 2);

        let unknown = provider_insights(&providers, Some(UNKNOWN_CITY));
        assert_eq!(unknown.in_selected_city[0].provider_id, 4);
    }

    #[test]
    fn empty_tables_give_empty_pages() {
        let page = receiver_insights(&[], None);
        assert!(page.selected_city.is_none());
        assert!(page.by_city.is_empty());
        assert!(page.in_selected_city.is_empty());
        assert!(city_options(&Snapshot::default()).is_empty());
    }
}
