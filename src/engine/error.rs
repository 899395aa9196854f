use thiserror::Error;

/// Everything the engine can reject. The message is what a player sees,
/// so `Display` is just the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The inputs themselves are wrong: bad indices, bad parameters, bad decks.
    #[error("{0}")]
    InvalidArgument(String),
    /// The inputs are fine but the game is not in a state that allows the operation.
    #[error("{0}")]
    IllegalState(String),
}

impl GameError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }

    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }

    #[cfg(test)]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[cfg(test)]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
