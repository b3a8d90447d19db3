//! Error types for the events page.

use thiserror::Error;

/// Errors that can occur while loading or rendering the events page.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Required page element '#{0}' not found")]
    MissingAnchor(&'static str),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),
}

/// Result type alias for events page operations.
pub type EventsResult<T> = Result<T, EventsError>;
