use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid content for a value type, raised at construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} length must be equal or less than {max} chars")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be in interval <{min}, {max}>, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} contains characters that are not allowed: {value}")]
    InvalidCharacters { field: &'static str, value: String },

    #[error("Edge must have different vertices set, got '{0}' on both ends")]
    IdenticalVertices(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("You have exceeded maximum number ({max}) of edges in graph")]
    CapacityExceeded { max: usize },

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Graph not found: {0}")]
    GraphNotFound(String),

    #[error("Graph already exists: {0}")]
    GraphExists(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Shortest path search was cancelled")]
    Cancelled,
}

impl Error {
    /// True when the caller sent something malformed, as opposed to a failure on our side.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::CapacityExceeded { .. }
                | Error::MissingArgument(_)
                | Error::GraphNotFound(_)
                | Error::GraphExists(_)
        )
    }
}
