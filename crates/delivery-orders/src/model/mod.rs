//! Plain data types shared by the actors, the pricing engine and the clients.

pub mod address;
pub mod order;
pub mod role;

pub use address::*;
pub use order::*;
pub use role::*;
