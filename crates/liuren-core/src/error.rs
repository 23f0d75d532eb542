/// Alias for `Result<T, LiurenError>`.
pub type LiurenResult<T> = Result<T, LiurenError>;

/// Errors that can occur while casting a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiurenError {
    /// The supplied components do not form a valid date and hour, or the
    /// lunar calendar cannot resolve the date.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LiurenError {
    /// Shorthand for building an [`LiurenError::InvalidInput`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
