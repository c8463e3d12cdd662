mod estimate;
mod segment;

pub use estimate::*;
pub use segment::*;

use tracing::debug;

use crate::{
    atlas::{Atlas, Line, Station},
    shared::geo::{Coordinate, Distance},
};

/// The nearest stations to two points and, when one exists, a line serving
/// both. `line` being None is the normal "no direct line" outcome and is
/// distinct from the whole lookup returning None for missing reference
/// data.
#[derive(Debug, Clone)]
pub struct Connection<'a> {
    pub from_station: &'a Station,
    pub to_station: &'a Station,
    pub line: Option<&'a Line>,
}

/// Resolves both points to their nearest station and checks single-line
/// reachability. This deliberately stops at "do these two stations share a
/// line" - there is no transfer search, and routes that would need one
/// report no direct line instead.
pub fn connection<'a>(
    atlas: &'a Atlas,
    city_id: &str,
    from: &Coordinate,
    to: &Coordinate,
) -> Option<Connection<'a>> {
    let from_station = atlas.nearest_station(city_id, from)?;
    let to_station = atlas.nearest_station(city_id, to)?;
    let line = atlas
        .lines_through_station(&from_station.id)
        .into_iter()
        .find(|line| line.serves(&to_station.id));
    Some(Connection {
        from_station,
        to_station,
        line,
    })
}

/// Suggests a route between two points as an ordered list of segments.
///
/// With a direct line between the nearest stations the route is an access
/// walk, a transit leg and an egress walk; the transit leg is sized as the
/// remainder of the direct distance so that segment distances always sum to
/// the direct point-to-point distance. Without a direct line (or when
/// walking to the stations would already cover the direct distance) the
/// route degrades to a single walking segment, never an error.
pub fn plan(atlas: &Atlas, city_id: &str, from: &Coordinate, to: &Coordinate) -> Vec<RouteSegment> {
    let total = from.distance(to);
    let Some(connection) = connection(atlas, city_id, from, to) else {
        debug!(%city_id, "no stations registered, walking the whole way");
        return vec![RouteSegment::walk(from.to_string(), to.to_string(), total)];
    };
    let Some(line) = connection.line else {
        return vec![RouteSegment::walk(from.to_string(), to.to_string(), total)];
    };

    let access = from.distance(&connection.from_station.coordinate);
    let egress = connection.to_station.coordinate.distance(to);
    if access + egress >= total {
        // The station detour costs more than walking the direct distance
        return vec![RouteSegment::walk(from.to_string(), to.to_string(), total)];
    }
    let ride = total - access - egress;

    let mut segments = Vec::with_capacity(3);
    if access > Distance::default() {
        segments.push(RouteSegment::walk(
            from.to_string(),
            connection.from_station.name.to_string(),
            access,
        ));
    }
    segments.push(RouteSegment::transit(
        connection.from_station.name.to_string(),
        connection.to_station.name.to_string(),
        ride,
        line,
    ));
    if egress > Distance::default() {
        segments.push(RouteSegment::walk(
            connection.to_station.name.to_string(),
            to.to_string(),
            egress,
        ));
    }
    segments
}

/// Distance and travel-time annotation between two POIs, the value the
/// itinerary view shows between consecutive entries. None when either id is
/// unknown.
pub fn poi_leg(atlas: &Atlas, from_id: &str, to_id: &str) -> Option<(Distance, TravelEstimate)> {
    let from = atlas.poi_by_id(from_id)?;
    let to = atlas.poi_by_id(to_id)?;
    let distance = from.coordinate.distance(&to.coordinate);
    Some((distance, estimate(distance)))
}
