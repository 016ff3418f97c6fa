//! # Tracing Setup
//!
//! Compact, target-less `tracing-subscriber` output. The actor loop records an
//! `entity_type` field on every event, which makes module paths redundant.
//!
//! `RUST_LOG` takes precedence; without it the configured level applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- delivery.toml
//! ```
//!
//! At `info`, an order's trip through the system reads:
//!
//! ```text
//! INFO Actor started entity_type="Address"
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Address" id=address_1 size=1
//! INFO create_order: Sending create_order to actor login="u1"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO transition: Status changed id=order_1 from=Active to=In progress
//! ```
//!
//! At `debug`, payloads (`?params`), queries and quotes are logged as well.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, early in `main`.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
