use std::{collections::HashMap, sync::Arc};

use crate::{api::coordinate_from_str, dto::RouteSegmentDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tabiji::route;

#[derive(Serialize)]
pub struct EstimateDto {
    pub distance_km: f64,
    pub mode: String,
    pub minutes: u32,
}

/// Distance and travel-time estimate between two coordinates.
pub async fn estimate(
    Query(params): Query<HashMap<String, String>>,
    State(_): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (from, to) = endpoints(&params)?;
    let distance = from.distance(&to);
    let estimate = route::estimate(distance);
    Ok(Json(EstimateDto {
        distance_km: distance.as_kilometers(),
        mode: estimate.mode.to_string(),
        minutes: estimate.duration.as_minutes(),
    })
    .into_response())
}

/// Suggested multi-modal route between two coordinates within a city.
pub async fn route(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(city) = params.get("city") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let (from, to) = endpoints(&params)?;
    let segments: Vec<_> = route::plan(&state.atlas, city, &from, &to)
        .into_iter()
        .map(RouteSegmentDto::from)
        .collect();
    Ok(Json(segments).into_response())
}

fn endpoints(
    params: &HashMap<String, String>,
) -> Result<(tabiji::shared::geo::Coordinate, tabiji::shared::geo::Coordinate), StatusCode> {
    let Some(from) = params.get("from") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let Some(to) = params.get("to") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    Ok((coordinate_from_str(from)?, coordinate_from_str(to)?))
}
