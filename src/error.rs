//! Error types.
//!
//! Inputs are validated once, when a computation begins. After that the
//! recurrence cannot fail, and running out of quantum is reported as
//! [`Step::Continue`](crate::scheduler::Step::Continue), not as an error.

/// Errors surfaced by [`Scheduler::begin`](crate::scheduler::Scheduler::begin).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevenshteinError {
    /// An input buffer cannot be processed: its length does not fit the
    /// matrix cell type, or the matrix cell count is not addressable.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl LevenshteinError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LevenshteinError>;

#[cfg(test)]
mod tests {
    use super::LevenshteinError;

    #[test]
    fn display_carries_reason() {
        let err = LevenshteinError::invalid_input("s1 too long");
        assert_eq!(err.to_string(), "invalid input: s1 too long");
    }
}
