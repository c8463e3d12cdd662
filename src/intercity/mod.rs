use std::sync::Arc;

use crate::{
    fixtures::models::IntercityRow,
    shared::time::{Duration, Time},
};

/// A fixed intercity connection between two cities. The timetable built on
/// top of it is simulated from the departure interval, not a real schedule,
/// so it carries no correctness guarantee beyond being deterministic.
#[derive(Debug, Default, Clone)]
pub struct Ride {
    pub id: Arc<str>,
    pub from_city: Arc<str>,
    pub to_city: Arc<str>,
    pub train: Arc<str>,
    pub duration: Duration,
    pub price: u32,
    pub interval: Duration,
}

impl From<IntercityRow> for Ride {
    fn from(value: IntercityRow) -> Self {
        Self {
            id: value.route_id.into(),
            from_city: value.from_city.into(),
            to_city: value.to_city.into(),
            train: value.train.into(),
            duration: Duration::from_minutes(value.duration_minutes),
            price: value.price,
            interval: Duration::from_minutes(value.interval_minutes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub departs: Time,
    pub arrives: Time,
}

impl Ride {
    /// The first departure strictly after `now`, on the ride's interval
    /// grid. `now` is always supplied by the caller, never sampled here.
    pub fn next_departure(&self, now: Time) -> Departure {
        let mut departs = now.ceil_to(self.interval);
        if departs <= now {
            departs += self.interval;
        }
        Departure {
            departs,
            arrives: departs + self.duration,
        }
    }

    /// The next `count` departures after `now`, one interval apart.
    pub fn next_departures(&self, now: Time, count: usize) -> Vec<Departure> {
        let mut departures = Vec::with_capacity(count);
        let mut current = now;
        for _ in 0..count {
            let departure = self.next_departure(current);
            current = departure.departs;
            departures.push(departure);
        }
        departures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride() -> Ride {
        Ride {
            id: "tokyo-kyoto".into(),
            from_city: "tokyo".into(),
            to_city: "kyoto".into(),
            train: "Nozomi".into(),
            duration: Duration::from_minutes(135),
            price: 13320,
            interval: Duration::from_minutes(30),
        }
    }

    #[test]
    fn next_departure_rounds_up() {
        let now = Time::from_hm("09:10").unwrap();
        let departure = ride().next_departure(now);
        assert_eq!(departure.departs, Time::from_hm("09:30").unwrap());
        assert_eq!(departure.arrives, Time::from_hm("11:45").unwrap());
    }

    #[test]
    fn next_departure_on_boundary_is_pushed() {
        let now = Time::from_hm("09:30").unwrap();
        let departure = ride().next_departure(now);
        assert_eq!(departure.departs, Time::from_hm("10:00").unwrap());
    }

    #[test]
    fn next_departures_step_by_interval() {
        let now = Time::from_hm("08:00").unwrap();
        let departures = ride().next_departures(now, 3);
        assert_eq!(departures.len(), 3);
        assert_eq!(departures[0].departs, Time::from_hm("08:30").unwrap());
        assert_eq!(departures[1].departs, Time::from_hm("09:00").unwrap());
        assert_eq!(departures[2].departs, Time::from_hm("09:30").unwrap());
    }
}
