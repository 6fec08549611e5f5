use std::fmt;

/// Result type for catalog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort order string was neither "asc" nor "desc"
    InvalidSortOrder(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSortOrder(value) => {
                write!(f, "Invalid sort order '{}' (expected 'asc' or 'desc')", value)
            }
        }
    }
}

impl std::error::Error for Error {}
