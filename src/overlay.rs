use serde::Serialize;

use crate::constants::{HEAT_INTENSITY_SCALE, MAJOR_MAX_FACTOR, SMOOTH_MAX_FACTOR};
use crate::severity::BumpSeverity;
use crate::types::RoadBump;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Markers,
    Heat,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub color: &'static str,
    pub severity: BumpSeverity,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lon: f64,
    pub intensity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    Markers(Vec<Marker>),
    Heat(Vec<HeatPoint>),
}

/// Unit heat weight for a bumpiness factor. Values below the smooth bound
/// come out negative and extreme values exceed 1; the heat layer clamps.
pub fn heat_intensity(factor: f64) -> f64 {
    (factor - SMOOTH_MAX_FACTOR) / MAJOR_MAX_FACTOR / HEAT_INTENSITY_SCALE
}

pub fn build_markers(bumps: &[RoadBump]) -> Vec<Marker> {
    bumps
        .iter()
        .map(|bump| {
            let severity = BumpSeverity::classify(bump.bumpiness_factor);
            Marker {
                lat: bump.location.lat(),
                lon: bump.location.lon(),
                color: severity.color(),
                severity,
            }
        })
        .collect()
}

pub fn build_heat_points(bumps: &[RoadBump]) -> Vec<HeatPoint> {
    bumps
        .iter()
        .map(|bump| HeatPoint {
            lat: bump.location.lat(),
            lon: bump.location.lon(),
            intensity: heat_intensity(bump.bumpiness_factor),
        })
        .collect()
}

pub fn build_overlay(bumps: &[RoadBump], mode: DisplayMode) -> Overlay {
    match mode {
        DisplayMode::Markers => Overlay::Markers(build_markers(bumps)),
        DisplayMode::Heat => Overlay::Heat(build_heat_points(bumps)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SRID_WGS84;
    use crate::types::BumpLocation;
    use chrono::DateTime;

    fn bump(factor: f64) -> RoadBump {
        RoadBump {
            device_id: "dev-1".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            bumpiness_factor: factor,
            location: BumpLocation {
                x: 8.9606471,
                y: 46.0109711,
                srid: SRID_WGS84,
            },
        }
    }

    #[test]
    fn heat_intensity_is_zero_at_the_smooth_bound() {
        assert_eq!(heat_intensity(50.0), 0.0);
    }

    #[test]
    fn heat_intensity_is_one_third_at_severe_plus_smooth_bound() {
        assert_eq!(heat_intensity(250.0), 1.0 / 3.0);
    }

    #[test]
    fn heat_intensity_goes_negative_below_the_smooth_bound() {
        assert!(heat_intensity(0.0) < 0.0);
    }

    #[test]
    fn markers_carry_the_band_color_and_latlon() {
        let markers = build_markers(&[bump(75.0)]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].severity, BumpSeverity::Minor);
        assert_eq!(markers[0].color, "#ADFF2F");
        assert_eq!(markers[0].lat, 46.0109711);
        assert_eq!(markers[0].lon, 8.9606471);
    }

    #[test]
    fn build_overlay_dispatches_on_display_mode() {
        let bumps = vec![bump(75.0), bump(250.0)];
        match build_overlay(&bumps, DisplayMode::Markers) {
            Overlay::Markers(markers) => assert_eq!(markers.len(), 2),
            Overlay::Heat(_) => panic!("expected markers"),
        }
        match build_overlay(&bumps, DisplayMode::Heat) {
            Overlay::Heat(points) => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[1].intensity, 1.0 / 3.0);
            }
            Overlay::Markers(_) => panic!("expected heat points"),
        }
    }
}
