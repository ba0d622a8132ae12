use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in the spatial reference system identified by `srid`. For the
/// SRID this dataset uses (WGS84), `x` is longitude and `y` is latitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BumpLocation {
    pub x: f64,
    pub y: f64,
    pub srid: u32,
}

impl BumpLocation {
    pub fn lon(&self) -> f64 {
        self.x
    }

    pub fn lat(&self) -> f64 {
        self.y
    }
}

/// A single road-roughness sample reported by a device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadBump {
    pub device_id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub bumpiness_factor: f64,
    pub location: BumpLocation,
}

/// Envelope the bump API wraps every response in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BumpApiResponse {
    pub data: Option<Vec<RoadBump>>,
    pub message: Option<String>,
}

/// The geographic rectangle currently visible on the map, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// The published view state: the bump set for the last applied fetch,
/// replaced wholesale on every viewport change.
#[derive(Clone, Debug, Default)]
pub struct BumpView {
    pub bumps: Vec<RoadBump>,
    pub seq: u64,
    pub fetched_at_ms: i64,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SRID_WGS84;

    #[test]
    fn bump_response_envelope_parses_epoch_second_timestamps() {
        let payload = r#"{
            "data": [{
                "device_id": "dev-7",
                "created_at": 1700000000,
                "bumpiness_factor": 120,
                "location": { "x": 8.9606471, "y": 46.0109711, "srid": 4326 }
            }],
            "message": null
        }"#;

        let envelope: BumpApiResponse = serde_json::from_str(payload).unwrap();
        let bumps = envelope.data.unwrap();
        assert_eq!(bumps.len(), 1);
        assert_eq!(bumps[0].device_id, "dev-7");
        assert_eq!(bumps[0].created_at.timestamp(), 1_700_000_000);
        assert_eq!(bumps[0].bumpiness_factor, 120.0);
        assert_eq!(bumps[0].location.srid, SRID_WGS84);
        assert_eq!(bumps[0].location.lat(), 46.0109711);
        assert_eq!(bumps[0].location.lon(), 8.9606471);
    }

    #[test]
    fn null_data_field_deserializes_to_none() {
        let envelope: BumpApiResponse =
            serde_json::from_str(r#"{"data": null, "message": "no rows"}"#).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("no rows"));
    }
}
