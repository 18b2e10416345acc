use thiserror::Error;

/// Errors surfaced by poll operations.
///
/// The wire format flattens these into plain GraphQL error messages, but the
/// kind is kept as a typed classification so tests and future structured
/// error reporting can distinguish them.
#[derive(Error, Debug)]
pub enum PollError {
    /// A referenced Question/Choice/Response id did not resolve.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Structural violation of the type-conditional invariants.
    #[error("{0}")]
    InvalidInput(String),

    /// The operation would break the two-choice minimum.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PollError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::ConstraintViolation(message.into())
    }
}
