use serde::{Deserialize, Serialize};

/// Top level of a Google Maps geocoding response. Only the fields the
/// pipeline reads are modeled; the rest of the payload is ignored.
#[derive(Debug, Deserialize, Serialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Geometry {
    pub location: GeocodeLocation,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct GeocodeLocation {
    pub lat: f64,
    pub lng: f64,
}
