// Error kinds surfaced by the API client and the views.

use reqwest::StatusCode;
use thiserror::Error;

use crate::book::BookId;

/// Everything that can go wrong while talking to the library API or
/// preparing a request for it. The UI renders these as messages and
/// returns to the menu.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("could not reach the library API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("book {id} was not found")]
    NotFound { id: BookId },

    #[error("library API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response from the library API: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid book: {0}")]
    Validation(String),
}

impl LibraryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
