use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    atlas::Atlas,
    trip::{Budget, EntryItem, Itinerary, ItineraryEntry, Trip},
};

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Base64 error: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct SharePayload {
    pois: Vec<String>,
    rides: Vec<String>,
    items: Vec<ItineraryEntry>,
    budget: Budget,
}

/// Encodes the trip as a URL-safe token for a share link.
pub fn encode(trip: &Trip) -> Result<String, ShareError> {
    let payload = SharePayload {
        pois: trip.selected_pois.clone(),
        rides: trip.selected_rides.clone(),
        items: trip.itinerary.entries().to_vec(),
        budget: trip.budget,
    };
    let json = serde_json::to_vec(&payload)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn share_link(trip: &Trip, base_url: &str) -> Result<String, ShareError> {
    Ok(format!("{}?trip={}", base_url, encode(trip)?))
}

/// Rebuilds a trip from a share token. Ids that no longer resolve against
/// the atlas are dropped silently; a link from an older dataset degrades
/// to whatever still exists instead of failing.
pub fn decode(atlas: &Atlas, token: &str) -> Result<Trip, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    let payload: SharePayload = serde_json::from_slice(&bytes)?;

    let mut trip = Trip {
        selected_pois: payload
            .pois
            .into_iter()
            .filter(|id| atlas.poi_by_id(id).is_some())
            .collect(),
        selected_rides: payload
            .rides
            .into_iter()
            .filter(|id| atlas.ride_by_id(id).is_some())
            .collect(),
        itinerary: Itinerary::new(),
        budget: payload.budget,
    };
    for entry in payload.items {
        let resolves = match &entry.item {
            EntryItem::Poi { id } => atlas.poi_by_id(id).is_some(),
            EntryItem::Ride { id } => atlas.ride_by_id(id).is_some(),
            EntryItem::Leg(_) => true,
        };
        if resolves {
            let id = trip.itinerary.add(entry.item, entry.date, entry.slot);
            trip.itinerary.set_notes(id, entry.notes);
        }
    }
    Ok(trip)
}

#[derive(Serialize)]
struct ExportEntry {
    date: chrono::NaiveDate,
    slot: &'static str,
    name: String,
    notes: Option<String>,
}

#[derive(Serialize)]
struct Export {
    items: Vec<ExportEntry>,
    budget: Budget,
    total: u32,
}

/// Pretty-printed JSON rendition of the itinerary with names resolved, the
/// payload behind the "export" button. Entries whose ids no longer resolve
/// are exported under "Unknown".
pub fn export_json(trip: &Trip, atlas: &Atlas) -> Result<String, ShareError> {
    let items = trip
        .itinerary
        .entries()
        .iter()
        .map(|entry| ExportEntry {
            date: entry.date,
            slot: entry.slot.label(),
            name: entry
                .item
                .display_name(atlas)
                .unwrap_or_else(|| "Unknown".to_string()),
            notes: entry.notes.clone(),
        })
        .collect();
    let export = Export {
        items,
        budget: trip.budget,
        total: trip.budget.total(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
