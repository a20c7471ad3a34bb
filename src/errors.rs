/// Errors raised when an operation's precondition on its input is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl CipherError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CipherError::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
