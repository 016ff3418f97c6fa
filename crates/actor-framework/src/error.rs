//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, plus a carrier for entity hook
//! errors so typed domain failures survive the trip across the channel.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when this is a runtime error or when the boxed
    /// error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("rejected: {0}")]
    struct Rejected(u32);

    #[test]
    fn downcast_recovers_typed_entity_error() {
        let err = FrameworkError::EntityError(Box::new(Rejected(7)));
        assert_eq!(err.downcast_entity::<Rejected>().unwrap(), Rejected(7));
    }

    #[test]
    fn downcast_leaves_foreign_errors_untouched() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        match err.downcast_entity::<Rejected>() {
            Err(FrameworkError::EntityError(inner)) => assert!(inner.to_string().contains("disk")),
            other => panic!("unexpected: {:?}", other),
        }

        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.downcast_entity::<Rejected>(),
            Err(FrameworkError::ActorClosed)
        ));
    }
}
