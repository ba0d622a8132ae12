use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{
    MAJOR_COLOR, MAJOR_MAX_FACTOR, MINOR_COLOR, MINOR_MAX_FACTOR, MODERATE_COLOR,
    MODERATE_MAX_FACTOR, SEVERE_COLOR, SMOOTH_COLOR, SMOOTH_MAX_FACTOR,
};
use crate::types::RoadBump;

/// The five ordered roughness classes. Band membership is decided by the
/// first upper bound the bumpiness factor does not exceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpSeverity {
    Smooth,
    Minor,
    Moderate,
    Major,
    Severe,
}

impl BumpSeverity {
    pub const ALL: [BumpSeverity; 5] = [
        BumpSeverity::Smooth,
        BumpSeverity::Minor,
        BumpSeverity::Moderate,
        BumpSeverity::Major,
        BumpSeverity::Severe,
    ];

    pub fn classify(factor: f64) -> BumpSeverity {
        if factor <= SMOOTH_MAX_FACTOR {
            BumpSeverity::Smooth
        } else if factor <= MINOR_MAX_FACTOR {
            BumpSeverity::Minor
        } else if factor <= MODERATE_MAX_FACTOR {
            BumpSeverity::Moderate
        } else if factor <= MAJOR_MAX_FACTOR {
            BumpSeverity::Major
        } else {
            BumpSeverity::Severe
        }
    }

    /// Inclusive upper bound of the band, `None` for the unbounded top band.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            BumpSeverity::Smooth => Some(SMOOTH_MAX_FACTOR),
            BumpSeverity::Minor => Some(MINOR_MAX_FACTOR),
            BumpSeverity::Moderate => Some(MODERATE_MAX_FACTOR),
            BumpSeverity::Major => Some(MAJOR_MAX_FACTOR),
            BumpSeverity::Severe => None,
        }
    }

    /// Exclusive lower bound of the band, `None` for the bottom band.
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            BumpSeverity::Smooth => None,
            BumpSeverity::Minor => Some(SMOOTH_MAX_FACTOR),
            BumpSeverity::Moderate => Some(MINOR_MAX_FACTOR),
            BumpSeverity::Major => Some(MODERATE_MAX_FACTOR),
            BumpSeverity::Severe => Some(MAJOR_MAX_FACTOR),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BumpSeverity::Smooth => SMOOTH_COLOR,
            BumpSeverity::Minor => MINOR_COLOR,
            BumpSeverity::Moderate => MODERATE_COLOR,
            BumpSeverity::Major => MAJOR_COLOR,
            BumpSeverity::Severe => SEVERE_COLOR,
        }
    }
}

/// Range filter `(min_exclusive, max_inclusive]` for one severity band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeverityFilter {
    band: BumpSeverity,
    min_exclusive: Option<f64>,
    max_inclusive: Option<f64>,
}

impl SeverityFilter {
    pub fn for_band(band: BumpSeverity) -> SeverityFilter {
        SeverityFilter {
            band,
            min_exclusive: band.lower_bound(),
            max_inclusive: band.upper_bound(),
        }
    }

    pub fn band(&self) -> BumpSeverity {
        self.band
    }

    pub fn matches(&self, bump: &RoadBump) -> bool {
        let factor = bump.bumpiness_factor;
        if let Some(min) = self.min_exclusive {
            if factor <= min {
                return false;
            }
        }
        if let Some(max) = self.max_inclusive {
            if factor > max {
                return false;
            }
        }
        true
    }
}

/// One filter per selected band, in ascending band order. Selection is keyed
/// by band value, so toggling the same band twice cannot duplicate a filter.
pub fn build_filters(selected: &BTreeSet<BumpSeverity>) -> Vec<SeverityFilter> {
    selected
        .iter()
        .map(|band| SeverityFilter::for_band(*band))
        .collect()
}

/// Union of the per-filter matches, preserving input order. An empty filter
/// list passes the full set through unchanged.
pub fn apply_filters(bumps: &[RoadBump], filters: &[SeverityFilter]) -> Vec<RoadBump> {
    if filters.is_empty() {
        return bumps.to_vec();
    }

    bumps
        .iter()
        .filter(|bump| filters.iter().any(|filter| filter.matches(bump)))
        .cloned()
        .collect()
}
