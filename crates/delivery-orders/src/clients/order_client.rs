use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Role};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError, StatusChange};
use crate::queries::{self, AddressField, Extreme, RECENT_FROM_LIMIT, RECENT_TO_LIMIT};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the Order actor: creation, lifecycle changes, listing and
/// per-customer history.
///
/// Address resolution and pricing happen in the Order actor's `on_create` hook;
/// the lifecycle check runs inside the actor's action handler.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Creates an `Active` order and returns the stored record.
    #[instrument(skip(self, params), fields(login = %params.login))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");

        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))
    }

    /// Moves order `id` to `requested` on behalf of a caller acting as `role`.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        requested: OrderStatus,
        role: Role,
    ) -> Result<StatusChange, OrderError> {
        let action = OrderAction::Transition {
            to: requested,
            role,
        };
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Transitioned(change) => {
                info!(from = %change.from, to = %change.to, "Status changed");
                Ok(change)
            }
        }
    }

    /// Orders visible to `login` acting as `role`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, login: &str, role: Role) -> Result<Vec<Order>, OrderError> {
        self.find(queries::visibility(login, role)).await
    }

    /// Up to `limit` distinct values of `field` over `login`'s orders, most
    /// recent first.
    #[instrument(skip(self))]
    pub async fn recent_addresses(
        &self,
        login: &str,
        field: AddressField,
        limit: usize,
    ) -> Result<Vec<String>, OrderError> {
        let orders = self
            .find(queries::placed_by(login).newest_first())
            .await?;
        Ok(queries::distinct_recent(&orders, field, limit))
    }

    pub async fn recent_from_addresses(&self, login: &str) -> Result<Vec<String>, OrderError> {
        self.recent_addresses(login, AddressField::From, RECENT_FROM_LIMIT)
            .await
    }

    pub async fn recent_to_addresses(&self, login: &str) -> Result<Vec<String>, OrderError> {
        self.recent_addresses(login, AddressField::To, RECENT_TO_LIMIT)
            .await
    }

    /// `login`'s cheapest or most expensive order. Ties go to the earliest
    /// created; `None` when the customer has no orders.
    #[instrument(skip(self))]
    pub async fn price_extreme(
        &self,
        login: &str,
        extreme: Extreme,
    ) -> Result<Option<Order>, OrderError> {
        let orders = self.find(queries::placed_by(login)).await?;
        Ok(queries::price_extreme(&orders, extreme).cloned())
    }

    pub async fn lowest_price_order(&self, login: &str) -> Result<Option<Order>, OrderError> {
        self.price_extreme(login, Extreme::Lowest).await
    }

    pub async fn highest_price_order(&self, login: &str) -> Result<Option<Order>, OrderError> {
        self.price_extreme(login, Extreme::Highest).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => OrderError::OrderNotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
