//! # Delivery Orders
//!
//! Delivery orders between named addresses, kept behind two resource actors:
//!
//! - **Address Directory** ([`address_actor`], [`clients::AddressClient`]): name
//!   to coordinate lookup.
//! - **Order store** ([`order_actor`], [`clients::OrderClient`]): pricing at
//!   creation, the role-gated status lifecycle, listing and per-customer history.
//!
//! [`pricing`] holds the distance formulas and rate table, [`queries`] the pure
//! reductions behind listing and history, [`config`] the TOML settings and
//! [`lifecycle`] the wiring.

pub mod address_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod queries;
