//! # ActorClient Trait
//!
//! Common surface for resource-specific clients: `get`, `find` and `delete` come
//! for free once a wrapper exposes its inner `ResourceClient` and says how to map
//! framework errors into its own error type.
use crate::{ActorEntity, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard store operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Address> for AddressClient {
///     type Error = AddressError;
///     fn inner(&self) -> &ResourceClient<Address> { &self.inner }
///     fn map_error(e: FrameworkError) -> AddressError {
///         AddressError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get(), find() and delete() are now available on AddressClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity selected by `query`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, query: Query<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
