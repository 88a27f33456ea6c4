use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UserId;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Maps a store error for the user with `id`, if the request named one.
    pub fn from_framework(error: FrameworkError, id: Option<UserId>) -> Self {
        match (error, id) {
            (FrameworkError::NotFound(_), Some(id)) => UserError::NotFound(id),
            (FrameworkError::Rejected(reason), _) => UserError::ValidationError(reason),
            (other, _) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
