// web_app/error.rs - Error types shared by client and server

use thiserror::Error;

/// A failed page fetch. Every variant is handled the same way by the
/// catalog view: log, notify once, keep the current data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("could not reach the product service: {0}")]
    Transport(String),

    #[error("product service answered with status {0}")]
    Status(u16),

    #[error("product service sent an unreadable response: {0}")]
    Decode(String),

    #[error("{0}")]
    Server(String),
}

impl FetchFailure {
    /// Text shown to the user in the error toast
    pub fn user_message(&self) -> String {
        "Failed to load products. Please try again.".to_string()
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchFailure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchFailure::Status(status.as_u16())
        } else {
            FetchFailure::Transport(err.to_string())
        }
    }
}

/// Misuse of the catalog state machine
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a fetch for page {0} is already in flight")]
    FetchInFlight(u32),

    #[error("page numbers start at 1")]
    InvalidPage,
}
