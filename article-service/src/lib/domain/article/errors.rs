use thiserror::Error;

/// Error for ArticleTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArticleTitleError {
    #[error("Article title must not be empty")]
    Empty,

    #[error("Article title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all article-related operations
#[derive(Debug, Clone, Error)]
pub enum ArticleError {
    #[error("Invalid article title: {0}")]
    InvalidTitle(#[from] ArticleTitleError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
