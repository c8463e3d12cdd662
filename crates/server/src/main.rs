mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use std::{path::PathBuf, sync::Arc, time::Instant};
use tabiji::{atlas::Atlas, fixtures::Fixtures};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();

    info!("Loading reference data...");
    let now = Instant::now();
    let atlas = match args.get(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let fixtures = if path.extension().is_some_and(|ext| ext == "zip") {
                Fixtures::new().from_zip(path)
            } else {
                Fixtures::new().from_dir(path)
            };
            Atlas::from_fixtures(&fixtures)
        }
        None => Atlas::bundled(),
    };
    let atlas = match atlas {
        Ok(atlas) => atlas,
        Err(err) => {
            error!("Failed to load reference data: {err}");
            std::process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(atlas));
    info!("Loading reference data took {:?}", now.elapsed());

    let app = axum::Router::new()
        .route("/search", get(api::search))
        .route("/nearest", get(api::nearest))
        .route("/estimate", get(api::estimate))
        .route("/route", get(api::route))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
