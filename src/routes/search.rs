use crate::models::responses::{PageResponse, SearchResponse};
use crate::routes::ApiError;
use crate::services::aggregate::{process_volumes, summarize_volume};
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "startIndex")]
    pub start_index: u32,
}

pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::bad_request("Query parameter is required"));
    }

    info!("Search query: {:?}", params);

    let started = Instant::now();
    let page = match state.catalog.volumes(&params.q, 0).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to fetch data from Google Books API: {}", e);
            return Err(ApiError::upstream(format!(
                "Failed to fetch data from Google Books API: {}",
                e
            )));
        }
    };
    // Elapsed time covers only the upstream fetch, as reported to the caller.
    let response_time = started.elapsed().as_secs_f64();

    let stats = process_volumes(&page.items);

    Ok(Json(SearchResponse {
        total_items: page.total_items,
        books: stats.books,
        most_common_author: stats.most_common_author,
        earliest_pub_date: stats.earliest_pub_date,
        latest_pub_date: stats.latest_pub_date,
        response_time,
    }))
}

pub async fn fetch_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse>, ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::bad_request("Query parameter is required"));
    }

    info!("Fetching page with startIndex={}", params.start_index);

    let page = match state.catalog.volumes(&params.q, params.start_index).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to fetch data from Google Books API: {}", e);
            return Err(ApiError::upstream(format!(
                "Failed to fetch data from Google Books API: {}",
                e
            )));
        }
    };

    let books = page.items.iter().map(summarize_volume).collect();

    Ok(Json(PageResponse { books }))
}
