//! Error types for the Order actor.

use crate::address_actor::AddressError;
use crate::model::{OrderId, OrderStatus, Role};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Everything except `AddressDirectory` and `ActorCommunicationError` is a
/// caller-input or domain-validation failure.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// `from` or `to` does not name a directory entry.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Distance computation produced a non-finite value.
    #[error("Invalid coordinates: distance is not a finite number")]
    InvalidCoordinates,

    #[error("Invalid order type: {0}")]
    InvalidOrderType(String),

    /// Price computation produced a non-finite value.
    #[error("Invalid price calculation")]
    InvalidPriceCalculation,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// `Done` is terminal.
    #[error("Order {0} is already done")]
    OrderAlreadyDone(OrderId),

    #[error("Illegal transition from {from} to {to} for role {role}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
        role: Role,
    },

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Orders are kept for history; the store refuses to remove them.
    #[error("Order {0} cannot be deleted")]
    DeletionNotSupported(OrderId),

    /// The address directory failed while resolving an order's endpoints.
    #[error("Address directory error: {0}")]
    AddressDirectory(#[from] AddressError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
