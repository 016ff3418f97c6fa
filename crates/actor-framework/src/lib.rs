//! # Actor Framework
//!
//! Building blocks for keeping collections of records behind actors: each record
//! type gets one [`ResourceActor`] that owns its store and serves create, get,
//! query, update, delete and custom actions over a channel.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the record type, its payloads and its hooks.
//! 2. **Runtime** ([`ResourceActor`]) - the sequential message loop and the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! Business rules live in the entity hooks; the runtime takes care of ids,
//! ordering, logging and error transport.
//!
//! ## Store semantics
//!
//! - Ids are allocated from a counter starting at 1 and never reused, so the
//!   store's native order is creation order.
//! - [`Query`] filters, orders (oldest or newest first) and limits in one round trip.
//! - A request is handled to completion before the next one starts. An action
//!   hook that checks a record's state and then changes it cannot interleave
//!   with another request for the same store.
//!
//! ## Context injection
//!
//! Dependencies are passed to `run(context)` rather than to `new()`. An actor can
//! therefore be constructed before the clients it depends on exist:
//!
//! ```rust,ignore
//! let (address_actor, addresses) = ResourceActor::<Address>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(address_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext::new(addresses.clone(), pricing, transitions)));
//! ```
//!
//! As long as the dependency graph is acyclic, dropping every client shuts each
//! actor down in turn.
//!
//! ## Errors
//!
//! Hook errors travel back as [`FrameworkError::EntityError`]; domain clients use
//! [`FrameworkError::downcast_entity`] to recover their own error type.
//!
//! ## Testing
//!
//! See [`mock`] for a scripted client that answers requests without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::{Query, SortOrder};
