use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{PoiDto, StationDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct SearchResultDto {
    pub stations: Vec<StationDto>,
    pub pois: Vec<PoiDto>,
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 5,
        };
        let stations: Vec<_> = state
            .atlas
            .search_stations_by_name(query)
            .into_iter()
            .take(count)
            .map(StationDto::from)
            .collect();
        let pois: Vec<_> = state
            .atlas
            .search_pois_by_name(query)
            .into_iter()
            .take(count)
            .map(PoiDto::from)
            .collect();
        Ok(Json(SearchResultDto { stations, pois }).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
