use crate::application::ports::outbound::CatalogError;

/// An operation was invoked while the session was in the wrong state
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("no round is currently live")]
    NoActiveRound,
    #[error("the current round has already been resolved")]
    RoundAlreadyResolved,
}

/// Errors surfaced by the pool loader and the game session
///
/// A wrong guess is never an error; it resolves the round as lost.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Data format error: {0}")]
    DataFormat(String),
    #[error("Precondition failed: {0}")]
    Precondition(#[from] PreconditionViolation),
}

impl From<CatalogError> for GameError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Network(message) => Self::Network(message),
            CatalogError::DataFormat(message) => Self::DataFormat(message),
        }
    }
}
