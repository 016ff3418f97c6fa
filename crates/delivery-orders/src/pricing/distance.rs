//! Distance formulas.
//!
//! Both take two coordinates in degrees and return a non-negative scalar for
//! valid input. A non-finite component yields NaN, which the pricing layer turns
//! into [`OrderError::InvalidCoordinates`](crate::order_actor::OrderError).

use crate::model::Coordinate;
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`haversine`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Signature shared by every distance strategy.
pub type DistanceFn = fn(Coordinate, Coordinate) -> f64;

/// Selects the distance formula used when pricing new orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceStrategy {
    /// Euclidean distance over raw degrees. Unit-less.
    #[default]
    Planar,
    /// Great-circle distance in kilometers.
    Haversine,
}

impl DistanceStrategy {
    pub fn as_fn(self) -> DistanceFn {
        match self {
            DistanceStrategy::Planar => planar,
            DistanceStrategy::Haversine => haversine,
        }
    }
}

/// `sqrt(dLat^2 + dLon^2)`. Only meaningful for small separations.
pub fn planar(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = b.latitude - a.latitude;
    let d_lon = b.longitude - a.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().clamp(0.0, 1.0).asin();
    EARTH_RADIUS_KM * c
}
