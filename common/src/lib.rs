//! Records and payloads shared between the food donation backend and its clients.

pub mod model;
pub mod requests;
