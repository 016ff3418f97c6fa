use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Type-safe identifier for directory entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AddressId(pub u32);

impl From<u32> for AddressId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "address_{}", self.0)
    }
}

/// A named location in the address directory.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity); see
/// [`crate::address_actor`]. Entries are immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Unique lookup key.
    pub name: String,
    pub location: Coordinate,
}

impl Address {
    pub fn new(id: AddressId, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}

/// Payload for registering a directory entry.
#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub name: String,
    pub location: Coordinate,
}
