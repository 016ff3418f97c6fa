use crate::address_actor::AddressError;
use crate::model::{Address, AddressCreate, AddressId, Coordinate};
use actor_framework::{ActorClient, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the Address Directory.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }

    /// Adds a directory entry. Names are unique.
    ///
    /// The uniqueness check and the insert are two requests, so two concurrent
    /// registrations of the same new name can both succeed.
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        name: &str,
        location: Coordinate,
    ) -> Result<AddressId, AddressError> {
        if self.resolve(name).await?.is_some() {
            return Err(AddressError::AlreadyExists(name.to_string()));
        }
        let id = self
            .inner
            .create(AddressCreate {
                name: name.to_string(),
                location,
            })
            .await
            .map_err(Self::map_error)?;
        info!(%id, "Address registered");
        Ok(id)
    }

    /// Looks up an entry by exact name. Absence is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> Result<Option<Address>, AddressError> {
        let wanted = name.to_string();
        let found = self
            .find(Query::matching(move |a: &Address| a.name == wanted).limit(1))
            .await?
            .into_iter()
            .next();
        debug!(found = found.is_some(), "Resolved");
        Ok(found)
    }
}

#[async_trait]
impl ActorClient<Address> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<AddressError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => AddressError::NotFound(id),
            Err(other) => AddressError::ActorCommunicationError(other.to_string()),
        }
    }
}
