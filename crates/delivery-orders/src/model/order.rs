/// A delivery order between two named addresses.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity); see
/// [`crate::order_actor`] for creation (address resolution and pricing happen in
/// `on_create`) and for the status transition action.
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Tariff tier; selects the per-distance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Standard,
    Lite,
    Universal,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::Standard, OrderType::Lite, OrderType::Universal];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Standard => "standard",
            OrderType::Lite => "lite",
            OrderType::Universal => "universal",
        }
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| OrderError::InvalidOrderType(s.to_string()))
    }
}

/// Lifecycle stage of an order.
///
/// ```text
/// Active --> In progress --> Done
///    \
///     `---> Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Active,
    Rejected,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Active,
        OrderStatus::Rejected,
        OrderStatus::InProgress,
        OrderStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Active => "Active",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Done => "Done",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Customer who placed the order.
    pub login: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Fixed at creation.
    pub distance: f64,
    /// Fixed at creation, rounded to cents.
    pub price: f64,
    pub status: OrderStatus,
}

/// Payload for creating a new order. Distance, price and status are derived.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub login: String,
    pub from: String,
    pub to: String,
    pub order_type: OrderType,
}

impl OrderCreate {
    pub fn new(
        login: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        order_type: OrderType,
    ) -> Self {
        Self {
            login: login.into(),
            from: from.into(),
            to: to.into(),
            order_type,
        }
    }
}

impl Order {
    /// Builds an `Active` order whose distance and price are still unset.
    ///
    /// The order actor fills both in `on_create` before the record is stored, so
    /// no stored order ever carries the placeholder zeros.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            login: params.login,
            from: params.from,
            to: params.to,
            order_type: params.order_type,
            distance: 0.0,
            price: 0.0,
            status: OrderStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In progress\"");
        let parsed: OrderStatus = serde_json::from_str("\"In progress\"").unwrap();
        assert_eq!(parsed, OrderStatus::InProgress);

        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert_eq!(
            "Cancelled".parse::<OrderStatus>(),
            Err(OrderError::UnknownStatus("Cancelled".into()))
        );
    }

    #[test]
    fn test_order_type_parsing() {
        assert_eq!("lite".parse::<OrderType>().unwrap(), OrderType::Lite);
        assert_eq!(
            "express".parse::<OrderType>(),
            Err(OrderError::InvalidOrderType("express".into()))
        );
        // Wire names are case-sensitive.
        assert!("Standard".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_order_serializes_type_field() {
        let order = Order::new(
            OrderId(1),
            OrderCreate::new("u1", "A", "B", OrderType::Universal),
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "universal");
        assert_eq!(json["status"], "Active");
    }
}
