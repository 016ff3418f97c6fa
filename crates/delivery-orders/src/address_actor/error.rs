//! Error types for the Address actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(String),

    #[error("Address already exists: {0}")]
    AlreadyExists(String),

    /// Non-finite or out-of-range latitude/longitude.
    #[error("Invalid coordinates for address {0}")]
    InvalidCoordinates(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
