pub mod claim;
pub mod food_listing;
pub mod insights;
pub mod provider;
pub mod receiver;
