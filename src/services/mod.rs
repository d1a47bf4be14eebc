pub mod aggregate;
pub mod catalog;
pub mod flags;
pub mod slack;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("{0} is not set")]
    MissingConfig(&'static str),
}
