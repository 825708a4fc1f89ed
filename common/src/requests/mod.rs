use serde::Deserialize;

/// Query string for the provider and receiver pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// Filter selection for the food insights page.
///
/// Every field is optional; an empty string means "no filter", like the blank
/// first entry of a select box.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsightFilter {
    pub city: Option<String>,
    /// Provider name. The first provider with this name is used.
    pub provider: Option<String>,
    pub food_type: Option<String>,
    pub meal_type: Option<String>,
}

impl InsightFilter {
    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn provider(&self) -> Option<&str> {
        non_blank(&self.provider)
    }

    pub fn food_type(&self) -> Option<&str> {
        non_blank(&self.food_type)
    }

    pub fn meal_type(&self) -> Option<&str> {
        non_blank(&self.meal_type)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
