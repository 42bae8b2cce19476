//! Error types

use thiserror::Error;

/// Why a coffee image URL could not be obtained.
///
/// The board collapses every variant into the same message; the variants
/// only exist so the log says what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response has no image url")]
    MissingImage,

    #[error("fetch task ended without a result")]
    Aborted,
}

/// Why a press of the publish button was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("input is empty")]
    EmptyInput,

    #[error("a publish is already in flight")]
    Busy,
}
