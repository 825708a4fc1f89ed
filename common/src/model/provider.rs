use serde::{Deserialize, Serialize};

/// A stored row of the `Providers` table.
///
/// Descriptive columns are nullable in SQLite, so every one of them is optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

/// Fields submitted when a provider is created or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderForm {
    pub name: String,
    #[serde(rename = "type", default)]
    pub provider_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub contact: String,
}
