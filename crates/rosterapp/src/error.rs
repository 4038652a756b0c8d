use crate::model::RecordId;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Store error: no ids left after {0}")]
    IdsExhausted(RecordId),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    /// True when the action was refused before touching any state.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RosterError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
