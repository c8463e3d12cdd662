use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::trip::{Budget, ItineraryEntry};

/// A named snapshot of a trip, created only by an explicit save action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub items: Vec<ItineraryEntry>,
    pub selected_pois: Vec<String>,
    pub selected_rides: Vec<String>,
    pub budget: Budget,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The collection of saved plans. Plans only ever enter through [`save`]
/// and leave through [`delete`]; there is no auto-saving here.
///
/// [`save`]: SavedTrips::save
/// [`delete`]: SavedTrips::delete
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrips {
    trips: Vec<TripPlan>,
}

impl SavedTrips {
    pub fn new() -> Self {
        Default::default()
    }

    /// Saves a plan, replacing any existing plan with the same id.
    pub fn save(&mut self, plan: TripPlan) {
        match self.trips.iter_mut().find(|saved| saved.id == plan.id) {
            Some(saved) => *saved = plan,
            None => self.trips.push(plan),
        }
    }

    pub fn get(&self, id: &str) -> Option<&TripPlan> {
        self.trips.iter().find(|plan| plan.id == id)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.trips.len();
        self.trips.retain(|plan| plan.id != id);
        self.trips.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &TripPlan> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
