use serde::{Deserialize, Serialize};

/// A stored row of the `Receivers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub receiver_id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub receiver_type: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

/// Fields submitted when a receiver is created or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverForm {
    pub name: String,
    #[serde(rename = "type", default)]
    pub receiver_type: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub contact: String,
}
