use chrono::NaiveDate;
use tabiji::trip::{EntryItem, Itinerary, TimeSlot};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
}

fn poi(id: &str) -> EntryItem {
    EntryItem::Poi { id: id.to_string() }
}

fn filled(count: usize) -> Itinerary {
    let mut itinerary = Itinerary::new();
    for i in 0..count {
        itinerary.add(poi(&format!("poi-{i}")), date(), TimeSlot::Morning);
    }
    itinerary
}

fn assert_dense(itinerary: &Itinerary) {
    for (i, entry) in itinerary.entries().iter().enumerate() {
        assert_eq!(entry.order, i as u32, "order not dense at position {i}");
    }
}

#[test]
fn orders_are_dense_after_any_removal() {
    let n = 6;
    for k in 0..n {
        let mut itinerary = filled(n);
        let id = itinerary.entries()[k].id;
        assert!(itinerary.remove(id));
        assert_eq!(itinerary.len(), n - 1);
        assert_dense(&itinerary);
    }
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut itinerary = filled(3);
    assert!(!itinerary.remove(999));
    assert_eq!(itinerary.len(), 3);
    assert_dense(&itinerary);
}

#[test]
fn entry_ids_are_never_reused() {
    let mut itinerary = filled(3);
    let last = itinerary.entries()[2].id;
    itinerary.remove(last);
    let fresh = itinerary.add(poi("poi-new"), date(), TimeSlot::Evening);
    assert!(fresh > last);
}

#[test]
fn move_entry_renumbers() {
    let mut itinerary = filled(4);
    let moved = itinerary.entries()[3].id;
    assert!(itinerary.move_entry(3, 0));
    assert_eq!(itinerary.entries()[0].id, moved);
    assert_dense(&itinerary);
}

#[test]
fn move_entry_out_of_bounds_is_rejected() {
    let mut itinerary = filled(2);
    assert!(!itinerary.move_entry(0, 5));
    assert!(!itinerary.move_entry(5, 0));
    assert_dense(&itinerary);
}

#[test]
fn entries_for_filters_by_date() {
    let mut itinerary = Itinerary::new();
    let other_day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
    itinerary.add(poi("a"), date(), TimeSlot::Morning);
    itinerary.add(poi("b"), other_day, TimeSlot::Morning);
    itinerary.add(poi("c"), date(), TimeSlot::Night);
    assert_eq!(itinerary.entries_for(date()).len(), 2);
    assert_eq!(itinerary.entries_for(other_day).len(), 1);
}
