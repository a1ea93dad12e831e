use serde::{Deserialize, Serialize};

/// Response of the MBTA realtime `stopsbylocation` endpoint, ordered by
/// distance from the queried coordinate.
#[derive(Debug, Deserialize, Serialize)]
pub struct StopsByLocationResponse {
    pub stop: Vec<MbtaStop>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MbtaStop {
    /// Empty for stops that don't belong to a station, e.g. bus stops.
    pub parent_station_name: String,
    /// Miles from the queried coordinate. The API sends this as a string.
    pub distance: String,
}
