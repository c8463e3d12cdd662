use std::{collections::HashMap, sync::Arc};

use crate::{api::coordinate_from_str, dto::StationDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct NearestDto {
    pub station: StationDto,
    pub distance_km: f64,
}

/// Nearest station of a city to a coordinate. 404 when the city has no
/// registered stations, which is a legitimate answer rather than a failure.
pub async fn nearest(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(city) = params.get("city") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let Some(at) = params.get("at") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let coordinate = coordinate_from_str(at)?;

    match state.atlas.nearest_station(city, &coordinate) {
        Some(station) => {
            let distance_km = station.coordinate.distance(&coordinate).as_kilometers();
            Ok(Json(NearestDto {
                station: StationDto::from(station),
                distance_km,
            })
            .into_response())
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}
