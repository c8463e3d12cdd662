use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::shared::{geo::Distance, time::Duration};

/// Pace and overhead constants behind every travel-time estimate. These are
/// heuristics tuned for dense Japanese cities, not measured schedules; keep
/// them named so tests can pin the exact values and tuning stays in one
/// place.
pub const WALK_LIMIT: Distance = Distance::from_kilometers(1.5);
pub const WALK_PACE_MIN_PER_KM: f64 = 12.0;
pub const TRANSIT_BOARDING_MIN: f64 = 10.0;
pub const TRANSIT_PACE_MIN_PER_KM: f64 = 3.0;
pub const TRANSIT_WAIT_MIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelMode {
    Walk,
    Transit,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => f.write_str("Walk"),
            Self::Transit => f.write_str("Transit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEstimate {
    pub mode: TravelMode,
    pub duration: Duration,
}

/// Estimated door-to-door travel time for a distance. Anything under
/// [`WALK_LIMIT`] is walked; the limit itself already rides transit.
/// Deterministic for a given distance.
pub fn estimate(distance: Distance) -> TravelEstimate {
    if distance < WALK_LIMIT {
        TravelEstimate {
            mode: TravelMode::Walk,
            duration: walk_time(distance),
        }
    } else {
        TravelEstimate {
            mode: TravelMode::Transit,
            duration: transit_time(distance),
        }
    }
}

pub fn walk_time(distance: Distance) -> Duration {
    Duration::from_minutes((distance.as_kilometers() * WALK_PACE_MIN_PER_KM).round() as u32)
}

/// Boarding overhead plus in-vehicle time plus a wait allowance.
pub fn transit_time(distance: Distance) -> Duration {
    let minutes =
        TRANSIT_BOARDING_MIN + distance.as_kilometers() * TRANSIT_PACE_MIN_PER_KM + TRANSIT_WAIT_MIN;
    Duration::from_minutes(minutes.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_kilometer_walks() {
        let result = estimate(Distance::from_kilometers(1.0));
        assert_eq!(result.mode, TravelMode::Walk);
        assert_eq!(result.duration.as_minutes(), 12);
    }

    #[test]
    fn two_kilometers_ride_transit() {
        let result = estimate(Distance::from_kilometers(2.0));
        assert_eq!(result.mode, TravelMode::Transit);
        assert_eq!(result.duration.as_minutes(), 21);
    }

    #[test]
    fn boundary_belongs_to_transit() {
        assert_eq!(
            estimate(Distance::from_kilometers(1.49)).mode,
            TravelMode::Walk
        );
        assert_eq!(
            estimate(Distance::from_kilometers(1.5)).mode,
            TravelMode::Transit
        );
    }

    #[test]
    fn zero_distance_is_zero_walking_time() {
        let result = estimate(Distance::default());
        assert_eq!(result.mode, TravelMode::Walk);
        assert_eq!(result.duration.as_minutes(), 0);
    }
}
