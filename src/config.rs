//! Endpoint and API key configuration for the lookup pipeline

const GMAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const MBTA_BASE_URL: &str = "http://realtime.mbta.com/developer/api/v2/stopsbylocation";
const MBTA_DEMO_API_KEY: &str = "wX9NwuHnZU2ToO7GmGR9uw";

/// Base URLs and the API key used by the geocoder and the stop locator.
/// Passed explicitly into both stages instead of living as hidden globals.
#[derive(Clone, Debug)]
pub struct FinderConfig {
    pub geocode_base_url: String,
    pub stops_base_url: String,
    pub mbta_api_key: String,
}

impl FinderConfig {
    /// Reads overrides from the environment, falling back to the public
    /// demo endpoints and key.
    pub fn from_env() -> Self {
        FinderConfig {
            geocode_base_url: dotenvy::var("GMAPS_BASE_URL")
                .unwrap_or_else(|_| GMAPS_BASE_URL.to_string()),
            stops_base_url: dotenvy::var("MBTA_BASE_URL")
                .unwrap_or_else(|_| MBTA_BASE_URL.to_string()),
            mbta_api_key: dotenvy::var("MBTA_API_KEY")
                .unwrap_or_else(|_| MBTA_DEMO_API_KEY.to_string()),
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            geocode_base_url: GMAPS_BASE_URL.to_string(),
            stops_base_url: MBTA_BASE_URL.to_string(),
            mbta_api_key: MBTA_DEMO_API_KEY.to_string(),
        }
    }
}
