// src/error.rs
use thiserror::Error;

/// Why a lottery produced no jackpot reading.
#[derive(Debug, Error)]
pub enum JackpotError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("jackpot element '{selector}' not found at {url}")]
    ElementNotFound { url: String, selector: String },

    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("could not parse jackpot amount from '{raw}'")]
    UnparseableAmount { raw: String },
}
