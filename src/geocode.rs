//! Responsible for turning a free text place name into a coordinate
use crate::{
    config::FinderConfig,
    fetch::{get_json, GetJsonError},
    model::geocode_api_model::GeocodeResponse,
};
use anyhow::Context;
use reqwest::Url;
use tracing::info;

/// A latitude/longitude pair, passed by value between pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Builds the geocoding request URL with the place as the single
/// `address` query parameter.
pub fn build_geocode_url(base_url: &str, place: &str) -> Result<Url, anyhow::Error> {
    Url::parse_with_params(base_url, &[("address", place)]).context("Couldn't build geocode url")
}

/// Geocodes a place name through the configured endpoint, taking the
/// location of the first result.
#[tracing::instrument(err, skip(config))]
pub async fn resolve_coordinates(
    config: &FinderConfig,
    place: &str,
) -> Result<Coordinate, GeocodeError> {
    let url = build_geocode_url(&config.geocode_base_url, place)?;

    let response: GeocodeResponse = get_json(url).await?;

    let coordinate =
        coordinate_from_response(response).ok_or_else(|| GeocodeError::EmptyResults {
            place: place.to_string(),
        })?;

    info!(
        "resolved \"{place}\" to ({}, {})",
        coordinate.latitude, coordinate.longitude
    );

    Ok(coordinate)
}

/// None when the result list is empty.
fn coordinate_from_response(response: GeocodeResponse) -> Option<Coordinate> {
    let location = response.results.into_iter().next()?.geometry.location;

    Some(Coordinate {
        latitude: location.lat,
        longitude: location.lng,
    })
}

#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("the geocoder returned no results for \"{place}\"")]
    EmptyResults { place: String },

    #[error("error fetching the geocoding response")]
    Fetch(#[from] GetJsonError),

    #[error("error resolving coordinates")]
    Other(#[from] anyhow::Error),
}
