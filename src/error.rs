//! Error types for accordion operations.

use thiserror::Error;

/// Errors that can occur while building or driving the accordion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<String>),

    #[error("image error for {path}: {reason}")]
    Image { path: String, reason: String },

    #[error("template request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("template request for {url} returned status {status}")]
    TemplateStatus { url: String, status: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
