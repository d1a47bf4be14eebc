use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;
mod services;

use routes::{
    flags::toggle_last_button_flag,
    health::health_check,
    notify::send_slack_message,
    search::{fetch_page, search_books},
};
use services::catalog::{CatalogClient, GOOGLE_BOOKS_API_URL};
use services::flags::{FlagClient, LD_FLAG_URL};
use services::slack::SlackNotifier;

/// Outbound clients shared read-only across requests. Constructed once at
/// startup, torn down when the process exits.
pub struct AppState {
    pub catalog: CatalogClient,
    pub slack: SlackNotifier,
    pub flags: FlagClient,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("booksearch_service=info,tower_http=info")
        .init();

    let catalog_url = std::env::var("GOOGLE_BOOKS_API_URL")
        .unwrap_or_else(|_| GOOGLE_BOOKS_API_URL.to_string());
    let flag_url = std::env::var("LD_FLAG_URL").unwrap_or_else(|_| LD_FLAG_URL.to_string());
    // Absence of the secrets is not checked here; an unset value surfaces as
    // an error on the first request that needs it.
    let slack_webhook_url = std::env::var("SLACK_WEBHOOK_URL").ok();
    let ld_api_key = std::env::var("LD_API_KEY").ok();

    let http = reqwest::Client::new();
    let state = Arc::new(AppState {
        catalog: CatalogClient::with_base_url(http.clone(), catalog_url),
        slack: SlackNotifier::new(http.clone(), slack_webhook_url),
        flags: FlagClient::with_base_url(http, flag_url, ld_api_key),
    });

    let app = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route_service("/favicon.ico", ServeFile::new("static/books.png"))
        .route("/status", get(health_check))
        .route("/search", get(search_books))
        .route("/fetch_page", get(fetch_page))
        .route("/send_slack_message", post(send_slack_message))
        .route("/toggle_last_button_flag", post(toggle_last_button_flag))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Booksearch service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
