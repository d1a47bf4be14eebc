use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// One normalized book as the front end renders it. Field names follow the
/// wire format the front end already consumes.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub authors: String,
    pub title: String,
    pub description: String,
    pub published_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_items: u64,
    pub books: Vec<BookSummary>,
    pub most_common_author: String,
    pub earliest_pub_date: String,
    pub latest_pub_date: String,
    pub response_time: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageResponse {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
