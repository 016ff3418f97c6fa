//! Typed wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod address_client;
pub mod order_client;

pub use address_client::*;
pub use order_client::*;
