//! Per-type price rates.

use crate::model::OrderType;
use crate::order_actor::OrderError;
use rust_decimal::prelude::*;
use std::collections::HashMap;

/// Price per unit of distance, keyed by order type.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable(HashMap<OrderType, f64>);

impl Default for RateTable {
    fn default() -> Self {
        Self::new([
            (OrderType::Standard, 2.5),
            (OrderType::Lite, 1.5),
            (OrderType::Universal, 3.0),
        ])
    }
}

impl RateTable {
    pub fn new(rates: impl IntoIterator<Item = (OrderType, f64)>) -> Self {
        Self(rates.into_iter().collect())
    }

    /// Fails with `InvalidOrderType` when the table has no rate for `order_type`
    /// and with `InvalidPriceCalculation` when the rate is negative or not finite.
    pub fn rate(&self, order_type: OrderType) -> Result<f64, OrderError> {
        let rate = self
            .0
            .get(&order_type)
            .copied()
            .ok_or_else(|| OrderError::InvalidOrderType(order_type.to_string()))?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(OrderError::InvalidPriceCalculation);
        }
        Ok(rate)
    }

    /// `rate * distance`, rounded to two decimals. The result is always finite
    /// and non-negative.
    pub fn price(&self, order_type: OrderType, distance: f64) -> Result<f64, OrderError> {
        let price = round_cents(self.rate(order_type)? * distance)?;
        if !price.is_finite() || price < 0.0 {
            return Err(OrderError::InvalidPriceCalculation);
        }
        Ok(price)
    }
}

/// Rounds the exact binary value half away from zero, like `toFixed(2)`.
///
/// `8.345` is stored slightly below the half cent and becomes `8.34`; `0.125`
/// is an exact half and becomes `0.13`. Amounts outside the decimal range fail.
fn round_cents(amount: f64) -> Result<f64, OrderError> {
    Decimal::from_f64_retain(amount)
        .or_else(|| Decimal::from_f64(amount))
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .ok_or(OrderError::InvalidPriceCalculation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = RateTable::default();
        assert_eq!(rates.price(OrderType::Standard, 5.0).unwrap(), 12.5);
        assert_eq!(rates.price(OrderType::Lite, 5.0).unwrap(), 7.5);
        assert_eq!(rates.price(OrderType::Universal, 5.0).unwrap(), 15.0);
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let rates = RateTable::default();
        // 2.5 * 1.41421356 = 3.5355339
        assert_eq!(rates.price(OrderType::Standard, 2f64.sqrt()).unwrap(), 3.54);
        // 3.0 * 0.1234 = 0.3702
        assert_eq!(rates.price(OrderType::Universal, 0.1234).unwrap(), 0.37);
    }

    #[test]
    fn test_missing_rate_is_invalid_order_type() {
        let rates = RateTable::new([(OrderType::Standard, 2.5)]);
        assert_eq!(
            rates.price(OrderType::Universal, 1.0),
            Err(OrderError::InvalidOrderType("universal".into()))
        );
    }

    #[test]
    fn test_nan_distance_fails_price_calculation() {
        let rates = RateTable::default();
        assert_eq!(
            rates.price(OrderType::Standard, f64::NAN),
            Err(OrderError::InvalidPriceCalculation)
        );
        assert_eq!(
            rates.price(OrderType::Standard, f64::INFINITY),
            Err(OrderError::InvalidPriceCalculation)
        );
    }

    #[test]
    fn test_rounding_follows_the_stored_binary_value() {
        assert_eq!(round_cents(8.345), Ok(8.34));
        assert_eq!(round_cents(1.005), Ok(1.0));
        assert_eq!(round_cents(0.125), Ok(0.13));
        assert_eq!(round_cents(2.675), Ok(2.67));
        assert_eq!(round_cents(0.0), Ok(0.0));
    }

    #[test]
    fn test_negative_or_non_finite_rates_are_rejected() {
        for bad in [-2.0, f64::NAN, f64::INFINITY] {
            let rates = RateTable::new([(OrderType::Standard, bad)]);
            assert_eq!(
                rates.price(OrderType::Standard, 5.0),
                Err(OrderError::InvalidPriceCalculation),
                "rate {bad}"
            );
        }
        let free = RateTable::new([(OrderType::Lite, 0.0)]);
        assert_eq!(free.price(OrderType::Lite, 5.0), Ok(0.0));
    }

    #[test]
    fn test_price_outside_decimal_range_fails() {
        let rates = RateTable::default();
        assert_eq!(
            rates.price(OrderType::Universal, 1e307),
            Err(OrderError::InvalidPriceCalculation)
        );
        assert_eq!(
            rates.price(OrderType::Universal, f64::MAX),
            Err(OrderError::InvalidPriceCalculation)
        );
    }
}
