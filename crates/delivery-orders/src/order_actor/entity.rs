//! [`ActorEntity`] implementation for [`Order`].
//!
//! - `on_create` resolves both endpoints through the address directory and fixes
//!   distance and price. Any failure aborts the insert.
//! - `handle_action` runs the lifecycle check and applies the new status.
//! - Orders are never updated field-by-field and never deleted.

use super::actions::{OrderAction, OrderActionResult, StatusChange};
use super::transitions::TransitionTable;
use super::OrderError;
use crate::clients::AddressClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Role};
use crate::pricing::Pricing;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

/// Dependencies injected into the Order actor at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub addresses: AddressClient,
    pub pricing: Arc<Pricing>,
    pub transitions: Arc<TransitionTable>,
}

impl OrderContext {
    pub fn new(
        addresses: AddressClient,
        pricing: Arc<Pricing>,
        transitions: Arc<TransitionTable>,
    ) -> Self {
        Self {
            addresses,
            pricing,
            transitions,
        }
    }
}

impl Order {
    /// Applies a role-gated status change.
    fn transition(
        &mut self,
        to: OrderStatus,
        role: Role,
        table: &TransitionTable,
    ) -> Result<StatusChange, OrderError> {
        let from = self.status;
        if from == OrderStatus::Done {
            return Err(OrderError::OrderAlreadyDone(self.id));
        }
        if !table.permits(from, role, to) {
            return Err(OrderError::IllegalTransition { from, to, role });
        }
        self.status = to;
        Ok(StatusChange { from, to })
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let from = ctx
            .addresses
            .resolve(&self.from)
            .await?
            .ok_or_else(|| OrderError::AddressNotFound(self.from.clone()))?;
        let to = ctx
            .addresses
            .resolve(&self.to)
            .await?
            .ok_or_else(|| OrderError::AddressNotFound(self.to.clone()))?;

        let quote = ctx
            .pricing
            .quote(from.location, to.location, self.order_type)?;
        debug!(id = %self.id, distance = quote.distance, price = quote.price, "Quoted");
        self.distance = quote.distance;
        self.price = quote.price;
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::DeletionNotSupported(self.id))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Transition { to, role } => self
                .transition(to, role, &ctx.transitions)
                .map(OrderActionResult::Transitioned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderType;

    fn order(status: OrderStatus) -> Order {
        let mut order = Order::new(OrderId(7), OrderCreate::new("u1", "A", "B", OrderType::Lite));
        order.status = status;
        order
    }

    #[test]
    fn test_transition_applies_permitted_change() {
        let table = TransitionTable::default();
        let mut o = order(OrderStatus::Active);
        let change = o
            .transition(OrderStatus::InProgress, Role::Driver, &table)
            .unwrap();
        assert_eq!(
            change,
            StatusChange {
                from: OrderStatus::Active,
                to: OrderStatus::InProgress
            }
        );
        assert_eq!(o.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_rejected_transition_leaves_status_untouched() {
        let table = TransitionTable::default();
        let mut o = order(OrderStatus::InProgress);
        let err = o
            .transition(OrderStatus::Rejected, Role::Customer, &table)
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition {
                from: OrderStatus::InProgress,
                to: OrderStatus::Rejected,
                role: Role::Customer
            }
        );
        assert_eq!(o.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_done_wins_over_illegal_transition() {
        let table = TransitionTable::default();
        let mut o = order(OrderStatus::Done);
        for role in Role::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    o.transition(to, role, &table),
                    Err(OrderError::OrderAlreadyDone(OrderId(7)))
                );
            }
        }
    }
}
