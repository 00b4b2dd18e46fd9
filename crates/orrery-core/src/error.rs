//! Error types for catalog loading and the question-answer flow.

use thiserror::Error;

/// Invalid catalog data. Always fatal at load time: the explorer refuses to
/// start rather than render nonsensical geometry.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("first body `{id}` must have orbit index 0, found {index}")]
    StarNotFirst { id: String, index: u32 },

    #[error("body `{id}` has non-positive diameter {value}")]
    NonPositiveDiameter { id: String, value: f64 },

    #[error("body `{id}` has non-positive orbital speed {value}")]
    NonPositiveSpeed { id: String, value: f64 },

    #[error("star `{id}` diameter {value} km is not above the star threshold")]
    StarTooSmall { id: String, value: f64 },

    #[error("body `{id}` diameter {value} km is above the star threshold")]
    PlanetTooLarge { id: String, value: f64 },

    #[error("duplicate body id `{0}`")]
    DuplicateId(String),

    #[error("body `{id}` has orbit index {index}, not greater than previous {previous}")]
    NonMonotonicOrbit { id: String, index: u32, previous: u32 },

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a chat question was not submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("question is empty")]
    Empty,

    #[error("a question is already in flight")]
    Busy,

    #[error("no body is focused")]
    NoSelection,
}

/// Failure while talking to the generative-language service.
///
/// Never surfaced to the user as an error: `QuestionService::ask` maps every
/// variant to a fixed fallback message.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no text")]
    EmptyResponse,
}
