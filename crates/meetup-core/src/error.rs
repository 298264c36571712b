//! Error types for the Meetup model

use crate::condition::Condition;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeetupError>;

#[derive(Error, Debug)]
pub enum MeetupError {
    #[error("Invalid category: {category}")]
    InvalidCategory { category: String },

    #[error("Invalid state: {category} agents never take part in a meeting")]
    InvalidState { category: Condition },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}
