//! # Pricing Engine
//!
//! Turns a pair of coordinates and an order type into a distance and a price.
//! Built once at startup from configuration and shared with the order actor
//! through an `Arc`.

pub mod distance;
pub mod rates;

pub use distance::{DistanceFn, DistanceStrategy};
pub use rates::RateTable;

use crate::model::{Coordinate, OrderType};
use crate::order_actor::OrderError;

/// Distance and price fixed on an order at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub distance: f64,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct Pricing {
    distance: DistanceFn,
    rates: RateTable,
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(DistanceStrategy::default(), RateTable::default())
    }
}

impl Pricing {
    pub fn new(strategy: DistanceStrategy, rates: RateTable) -> Self {
        Self::with_distance_fn(strategy.as_fn(), rates)
    }

    /// Uses an arbitrary distance function in place of a named strategy.
    pub fn with_distance_fn(distance: DistanceFn, rates: RateTable) -> Self {
        Self { distance, rates }
    }

    pub fn quote(
        &self,
        from: Coordinate,
        to: Coordinate,
        order_type: OrderType,
    ) -> Result<Quote, OrderError> {
        let distance = (self.distance)(from, to);
        if !distance.is_finite() || distance < 0.0 {
            return Err(OrderError::InvalidCoordinates);
        }
        let price = self.rates.price(order_type, distance)?;
        Ok(Quote { distance, price })
    }
}
