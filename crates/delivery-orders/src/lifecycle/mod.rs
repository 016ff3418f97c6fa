//! # System Lifecycle
//!
//! Creating, wiring and stopping the actors, plus tracing setup.
//!
//! Actors are constructed without their dependencies; each dependency is handed
//! to `run(context)` when the actor is spawned:
//!
//! ```rust,ignore
//! let (address_actor, address_client) = address_actor::new(buffer);
//! let (order_actor, order_client) = order_actor::new(buffer);
//!
//! tokio::spawn(address_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext::new(address_client.clone(), pricing, transitions)));
//! ```
//!
//! Shutdown is driven by dropping clients. Once every sender for an actor's
//! channel is gone its loop ends, and it drops its own context, which may in turn
//! release the last client of a dependency.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::*;
pub use self::tracing::setup_tracing;
