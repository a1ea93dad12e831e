//! Responsible for finding the nearest subway station to a coordinate
use crate::{
    config::FinderConfig,
    fetch::{get_json, GetJsonError},
    geocode::Coordinate,
    model::mbta_api_model::{MbtaStop, StopsByLocationResponse},
};
use anyhow::Context;
use reqwest::Url;
use tracing::info;

/// Outcome of scanning the stops near a coordinate. The upstream list mixes
/// bus stops (empty parent station name) with subway stops, so finding stops
/// and finding a station are distinct outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum NearestStop {
    Found { station: String, distance: String },
    NoStopsNearby,
    NoNamedStation,
}

/// Builds the `stopsbylocation` request URL for the given coordinate.
pub fn build_stops_url(
    base_url: &str,
    api_key: &str,
    coordinate: Coordinate,
) -> Result<Url, anyhow::Error> {
    let url = format!(
        "{}?api_key={}&lat={}&lon={}&format=json",
        base_url, api_key, coordinate.latitude, coordinate.longitude
    );

    Url::parse(&url).context("Couldn't build stops url")
}

/// Fetches the stops near the coordinate and picks the nearest one that
/// belongs to a named parent station.
#[tracing::instrument(err, skip(config))]
pub async fn nearest_subway_stop(
    config: &FinderConfig,
    coordinate: Coordinate,
) -> Result<NearestStop, GetStopsError> {
    let url = build_stops_url(&config.stops_base_url, &config.mbta_api_key, coordinate)?;

    let response: StopsByLocationResponse = get_json(url).await?;

    info!("got {} stops near the coordinate", response.stop.len());

    Ok(nearest_from_stops(&response.stop))
}

/// The stop list arrives sorted by distance, so the first entry with a
/// non-empty parent station name is the nearest station.
pub fn nearest_from_stops(stops: &[MbtaStop]) -> NearestStop {
    if stops.is_empty() {
        return NearestStop::NoStopsNearby;
    }

    for stop in stops {
        if !stop.parent_station_name.is_empty() {
            return NearestStop::Found {
                station: stop.parent_station_name.clone(),
                distance: stop.distance.clone(),
            };
        }
    }

    NearestStop::NoNamedStation
}

#[derive(thiserror::Error, Debug)]
pub enum GetStopsError {
    #[error("error fetching the stops response")]
    Fetch(#[from] GetJsonError),

    #[error("error locating the nearest stop")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stop_list_means_no_stops_nearby() -> Result<(), anyhow::Error> {
        let fixture = include_str!("../documentation/example_responses/stops_empty.json");
        let response: StopsByLocationResponse = serde_json::from_str(fixture)?;

        assert_eq!(nearest_from_stops(&response.stop), NearestStop::NoStopsNearby);

        Ok(())
    }

    #[test]
    fn single_named_stop_is_returned_with_its_distance() -> Result<(), anyhow::Error> {
        let fixture = include_str!("../documentation/example_responses/stops_porter.json");
        let response: StopsByLocationResponse = serde_json::from_str(fixture)?;

        assert_eq!(
            nearest_from_stops(&response.stop),
            NearestStop::Found {
                station: "Porter".to_string(),
                distance: "0.2".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn bus_stops_without_a_parent_station_are_skipped() -> Result<(), anyhow::Error> {
        let fixture = include_str!("../documentation/example_responses/stops_davis.json");
        let response: StopsByLocationResponse = serde_json::from_str(fixture)?;

        assert_eq!(
            nearest_from_stops(&response.stop),
            NearestStop::Found {
                station: "Davis".to_string(),
                distance: "0.5348136".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn all_unnamed_stops_mean_no_named_station() -> Result<(), anyhow::Error> {
        let response: StopsByLocationResponse = serde_json::from_str(
            r#"{
                "stop": [
                    { "parent_station_name": "", "distance": "0.1" },
                    { "parent_station_name": "", "distance": "0.3" }
                ]
            }"#,
        )?;

        assert_eq!(nearest_from_stops(&response.stop), NearestStop::NoNamedStation);

        Ok(())
    }

    #[test]
    fn stops_url_carries_key_and_coordinate() -> Result<(), anyhow::Error> {
        let coordinate = Coordinate {
            latitude: 42.3875,
            longitude: -71.0995,
        };

        let config = FinderConfig::default();
        let url = build_stops_url(&config.stops_base_url, &config.mbta_api_key, coordinate)?;

        assert_eq!(
            url.as_str(),
            "http://realtime.mbta.com/developer/api/v2/stopsbylocation?api_key=wX9NwuHnZU2ToO7GmGR9uw&lat=42.3875&lon=-71.0995&format=json"
        );

        Ok(())
    }
}
