use crate::models::catalog::VolumesPage;
use crate::services::UpstreamError;
use reqwest::Client;

pub const GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Every page request uses the same size; the front end pages by offset only.
const PAGE_SIZE: &str = "10";

/// Client for the external book-catalog API.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch one page of results for `query` starting at `start_index`.
    /// No retries: a non-success status or transport failure is returned
    /// to the caller as-is.
    pub async fn volumes(&self, query: &str, start_index: u32) -> Result<VolumesPage, UpstreamError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("startIndex", start_index.to_string().as_str()),
                ("maxResults", PAGE_SIZE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn volumes_sends_query_offset_and_page_size() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "pride and prejudice".into()),
                Matcher::UrlEncoded("startIndex".into(), "20".into()),
                Matcher::UrlEncoded("maxResults".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "totalItems": 1,
                    "items": [
                        {
                            "volumeInfo": {
                                "authors": ["Jane Austen"],
                                "title": "Pride and Prejudice",
                                "publishedDate": "1813-01-28"
                            }
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = CatalogClient::with_base_url(Client::new(), server.url());
        let page = client.volumes("pride and prejudice", 20).await.unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.items.len(), 1);
        let info = page.items[0].volume_info.as_ref().unwrap();
        assert_eq!(info.authors, vec!["Jane Austen".to_string()]);
        assert_eq!(info.published_date.as_deref(), Some("1813-01-28"));
        assert_eq!(info.description, None);
    }

    #[tokio::test]
    async fn volumes_tolerates_missing_items() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"totalItems": 0}"#)
            .create_async()
            .await;

        let client = CatalogClient::with_base_url(Client::new(), server.url());
        let page = client.volumes("nothing", 0).await.unwrap();

        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn volumes_surfaces_upstream_status() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = CatalogClient::with_base_url(Client::new(), server.url());
        let err = client.volumes("rust", 0).await.unwrap_err();

        match err {
            UpstreamError::Status(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
