use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors from offset construction, flight documents, and replay.
///
/// Exhausting the search space is not an error; the search functions
/// return `None` for that.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("offset denominator is zero")]
    ZeroDenominator,

    #[error("malformed fraction: {0:?}")]
    MalformedFraction(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("flight has no steps")]
    EmptyFlight,

    #[error("first move is not +r")]
    FirstMoveNotAdd,

    #[error("step {index}: reciprocal of zero")]
    InvertedZero { index: usize },

    #[error("step {index}: replay produced {expected}, document records {recorded}")]
    ReplayMismatch {
        index: usize,
        expected: String,
        recorded: String,
    },

    #[error("flight ends at {last}, not 1")]
    OpenFlight { last: String },
}
