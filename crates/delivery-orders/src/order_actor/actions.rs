//! Custom actions for the Order actor.
//!
//! Handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on [`Order`](crate::model::Order), which runs with exclusive access to the
//! record: the lifecycle check and the status write cannot interleave with
//! another request.

use crate::model::{OrderStatus, Role};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order to `to` on behalf of a caller acting as `role`.
    Transition { to: OrderStatus, role: Role },
}

/// Results from OrderActions; variants match 1:1 with OrderAction.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Transitioned(StatusChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
}
