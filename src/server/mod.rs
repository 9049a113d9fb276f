pub mod handlers;
pub mod types;

use crate::{Result, browser::BrowserFetcher, config::Config};
use axum::{Router, http::Method, http::header, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Initialize the browser-backed fetcher
    let fetcher = BrowserFetcher::new(config.browser.clone(), config.upstream.clone());

    // Create application state
    let app_state = handlers::AppState {
        fetcher: Arc::new(fetcher),
        default_server: config.upstream.default_server.clone(),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router. Callers from sheets and scripts are cross
/// origin, so the endpoint is CORS-open.
pub fn router(state: handlers::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/dundam",
            get(handlers::lookup).options(handlers::preflight),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
