mod nearest;
mod route;
mod search;

pub use nearest::*;
pub use route::*;
pub use search::*;

use axum::http::StatusCode;
use tabiji::shared::geo::Coordinate;

/// Parses a "lat,lon" query value.
pub(crate) fn coordinate_from_str(value: &str) -> Result<Coordinate, StatusCode> {
    let split: Vec<_> = value.split(',').collect();
    if split.len() != 2 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let latitude: f64 = split[0].trim().parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let longitude: f64 = split[1].trim().parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Coordinate {
        latitude,
        longitude,
    })
}
