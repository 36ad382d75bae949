// src/error.rs
use thiserror::Error;

/// One variant per pipeline stage, so a failed run names the stage that died.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout, or non-success HTTP status from the model service.
    #[error("transport: {0}")]
    Transport(String),

    /// The result page lacked an expected structural element, or a data row
    /// disagreed with the header row.
    #[error("scrape: {0}")]
    Scrape(String),

    /// Cache record could not be written, read or decoded.
    #[error("storage: {0}")]
    Storage(String),

    /// No cached run under the given case name.
    #[error("no cached run named `{0}`")]
    NotFound(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}
