pub mod geocode_api_model;
pub mod mbta_api_model;
