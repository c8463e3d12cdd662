use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{atlas::Atlas, route::RouteSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    pub fn time_range(&self) -> &'static str {
        match self {
            Self::Morning => "09:00 - 12:00",
            Self::Afternoon => "12:00 - 15:00",
            Self::Evening => "15:00 - 18:00",
            Self::Night => "18:00 - 21:00",
        }
    }
}

/// What an itinerary entry points at. A tagged union, so reading a display
/// name is a total operation instead of probing loose record shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryItem {
    Poi { id: String },
    Ride { id: String },
    Leg(RouteSegment),
}

impl EntryItem {
    /// Resolves the entry's display name against the reference tables.
    /// None only when a referenced id no longer exists in the atlas.
    pub fn display_name(&self, atlas: &Atlas) -> Option<String> {
        match self {
            Self::Poi { id } => Some(atlas.poi_by_id(id)?.name.to_string()),
            Self::Ride { id } => {
                let ride = atlas.ride_by_id(id)?;
                Some(format!("{} {} - {}", ride.train, ride.from_city, ride.to_city))
            }
            Self::Leg(segment) => match &segment.line {
                Some(line) => Some(line.name.clone()),
                None => Some(segment.mode.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub id: u64,
    pub item: EntryItem,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub order: u32,
    pub notes: Option<String>,
}

/// The day-by-day schedule. Order values stay dense 0..n-1 across every
/// mutation; ids are assigned once and never reused.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    entries: Vec<ItineraryEntry>,
    next_id: u64,
}

impl Itinerary {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&mut self, item: EntryItem, date: NaiveDate, slot: TimeSlot) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let order = self.entries.len() as u32;
        self.entries.push(ItineraryEntry {
            id,
            item,
            date,
            slot,
            order,
            notes: None,
        });
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.renumber();
        }
        removed
    }

    pub fn set_notes(&mut self, id: u64, notes: Option<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.notes = notes;
                true
            }
            None => false,
        }
    }

    /// Moves the entry at `from` to position `to`, shifting the rest.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        self.renumber();
        true
    }

    pub(crate) fn retain_items<F>(&mut self, keep: F)
    where
        F: Fn(&EntryItem) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| keep(&entry.item));
        if self.entries.len() != before {
            self.renumber();
        }
    }

    fn renumber(&mut self) {
        self.entries
            .iter_mut()
            .enumerate()
            .for_each(|(i, entry)| entry.order = i as u32);
    }

    pub fn entries(&self) -> &[ItineraryEntry] {
        &self.entries
    }

    pub fn entries_for(&self, date: NaiveDate) -> Vec<&ItineraryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
