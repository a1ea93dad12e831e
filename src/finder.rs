//! Composes the geocoder and the stop locator into one description
use crate::{
    config::FinderConfig,
    geocode::resolve_coordinates,
    stops::{nearest_subway_stop, NearestStop},
};

/// Resolves the place to a coordinate, finds the nearest subway station and
/// renders the result as a single sentence. Failures of either lookup stage
/// bubble up unchanged.
#[tracing::instrument(err, skip(config))]
pub async fn describe_nearest_stop(
    config: &FinderConfig,
    place: &str,
) -> Result<String, anyhow::Error> {
    let coordinate = resolve_coordinates(config, place).await?;

    let nearest = nearest_subway_stop(config, coordinate).await?;

    Ok(render_description(place, &nearest))
}

pub fn render_description(place: &str, nearest: &NearestStop) -> String {
    match nearest {
        NearestStop::Found { station, distance } => {
            format!("{station} is {distance} miles from {place}")
        }
        NearestStop::NoStopsNearby => "There are no stops close to your location".to_string(),
        NearestStop::NoNamedStation => {
            "None of the stops close to your location belong to a subway station".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::mbta_api_model::StopsByLocationResponse, stops::nearest_from_stops};

    #[test]
    fn renders_the_station_distance_and_place() -> Result<(), anyhow::Error> {
        let fixture = include_str!("../documentation/example_responses/stops_davis.json");
        let response: StopsByLocationResponse = serde_json::from_str(fixture)?;

        let nearest = nearest_from_stops(&response.stop);

        assert_eq!(
            render_description("789 Somerville Avenue, Somerville, MA", &nearest),
            "Davis is 0.5348136 miles from 789 Somerville Avenue, Somerville, MA"
        );

        Ok(())
    }

    #[test]
    fn renders_the_no_stops_sentinel() {
        assert_eq!(
            render_description("Middle of the Atlantic", &NearestStop::NoStopsNearby),
            "There are no stops close to your location"
        );
    }

    #[test]
    fn renders_the_no_named_station_message() {
        assert_eq!(
            render_description("789 Somerville Avenue, Somerville, MA", &NearestStop::NoNamedStation),
            "None of the stops close to your location belong to a subway station"
        );
    }
}
