mod budget;
mod itinerary;
mod plan;
mod share;

pub use budget::*;
pub use itinerary::*;
pub use plan::*;
pub use share::*;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    atlas::{Poi, PoiKind},
    intercity::Ride,
};

/// The mutable state of the trip being planned: selections, schedule and
/// budget. Owned and passed around by the caller; the read-only reference
/// tables stay in [`Atlas`](crate::atlas::Atlas).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub(crate) selected_pois: Vec<String>,
    pub(crate) selected_rides: Vec<String>,
    pub(crate) itinerary: Itinerary,
    pub(crate) budget: Budget,
}

fn category_for(poi: &Poi) -> Category {
    match &poi.kind {
        PoiKind::Attraction { .. } => Category::Attractions,
        PoiKind::Hotel { .. } => Category::Accommodation,
        PoiKind::Restaurant { .. } => Category::Food,
    }
}

impl Trip {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a POI to the selection and its price to the matching budget
    /// category. Idempotent: selecting twice neither duplicates the entry
    /// nor double-counts the budget.
    pub fn select_poi(&mut self, poi: &Poi) -> bool {
        if self.is_poi_selected(&poi.id) {
            return false;
        }
        self.selected_pois.push(poi.id.to_string());
        self.budget.add(category_for(poi), poi.price());
        true
    }

    /// Removes the POI from the selection, drops its itinerary entries and
    /// reverses its budget contribution.
    pub fn deselect_poi(&mut self, poi: &Poi) -> bool {
        let Some(position) = self
            .selected_pois
            .iter()
            .position(|id| id == poi.id.as_ref())
        else {
            return false;
        };
        self.selected_pois.remove(position);
        self.budget.subtract(category_for(poi), poi.price());
        self.itinerary
            .retain_items(|item| !matches!(item, EntryItem::Poi { id } if id == poi.id.as_ref()));
        true
    }

    pub fn select_ride(&mut self, ride: &Ride) -> bool {
        if self.is_ride_selected(&ride.id) {
            return false;
        }
        self.selected_rides.push(ride.id.to_string());
        self.budget.add(Category::Transport, ride.price);
        true
    }

    pub fn deselect_ride(&mut self, ride: &Ride) -> bool {
        let Some(position) = self
            .selected_rides
            .iter()
            .position(|id| id == ride.id.as_ref())
        else {
            return false;
        };
        self.selected_rides.remove(position);
        self.budget.subtract(Category::Transport, ride.price);
        self.itinerary
            .retain_items(|item| !matches!(item, EntryItem::Ride { id } if id == ride.id.as_ref()));
        true
    }

    pub fn is_poi_selected(&self, id: &str) -> bool {
        self.selected_pois.iter().any(|selected| selected == id)
    }

    pub fn is_ride_selected(&self, id: &str) -> bool {
        self.selected_rides.iter().any(|selected| selected == id)
    }

    pub fn selected_pois(&self) -> &[String] {
        &self.selected_pois
    }

    pub fn selected_rides(&self) -> &[String] {
        &self.selected_rides
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn itinerary_mut(&mut self) -> &mut Itinerary {
        &mut self.itinerary
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Manual budget adjustment for spending that has no selectable item,
    /// like shopping money.
    pub fn set_budget(&mut self, category: Category, amount: u32) {
        self.budget.set(category, amount);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Snapshots the trip into a named plan. `now` is supplied by the
    /// caller so snapshots stay reproducible.
    pub fn snapshot(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> TripPlan {
        TripPlan {
            id: format!("{}-{}", slug(name), now.timestamp()),
            name: name.to_string(),
            start_date,
            end_date,
            items: self.itinerary.entries().to_vec(),
            selected_pois: self.selected_pois.clone(),
            selected_rides: self.selected_rides.clone(),
            budget: self.budget,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restores trip state from a saved plan.
    pub fn restore(plan: &TripPlan) -> Self {
        let mut itinerary = Itinerary::new();
        for entry in plan.items.iter() {
            let id = itinerary.add(entry.item.clone(), entry.date, entry.slot);
            itinerary.set_notes(id, entry.notes.clone());
        }
        Self {
            selected_pois: plan.selected_pois.clone(),
            selected_rides: plan.selected_rides.clone(),
            itinerary,
            budget: plan.budget,
        }
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
