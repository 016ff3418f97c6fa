//! Order-specific resource logic: creation-time pricing and the status
//! lifecycle.

pub mod actions;
pub mod entity;
pub mod error;
pub mod transitions;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;
pub use transitions::TransitionTable;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The actor's [`OrderContext`] is supplied to `run()`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
