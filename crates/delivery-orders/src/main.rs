//! Demo: loads a config (first argument, optional), seeds the directory and runs
//! one customer's orders through creation, the lifecycle and the history queries.

use delivery_orders::config::Config;
use delivery_orders::lifecycle::{setup_tracing, DeliverySystem};
use delivery_orders::model::{Coordinate, OrderCreate, OrderStatus, OrderType, Role};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path).await?,
        None => Config::default(),
    };
    setup_tracing(&config.log_level);

    info!("Starting delivery system");
    let system = DeliverySystem::start(&config).await?;

    if config.addresses.is_empty() {
        for (name, lat, lon) in [("Depot", 0.0, 0.0), ("Harbor", 3.0, 4.0), ("Market", 1.0, 1.0)] {
            system
                .address_client
                .register(name, Coordinate::new(lat, lon))
                .await?;
        }
    }

    let orders = &system.order_client;
    let span = tracing::info_span!("order_processing");
    async {
        let order = orders
            .create_order(OrderCreate::new("u1", "Depot", "Harbor", OrderType::Standard))
            .await?;
        info!(id = %order.id, distance = order.distance, price = order.price, "Order created");

        orders
            .transition(order.id, OrderStatus::InProgress, Role::Driver)
            .await?;

        if let Err(e) = orders
            .transition(order.id, OrderStatus::Rejected, Role::Customer)
            .await
        {
            warn!(error = %e, "Customer cannot reject an order in progress");
        }

        orders
            .transition(order.id, OrderStatus::Done, Role::Driver)
            .await?;

        orders
            .create_order(OrderCreate::new("u1", "Market", "Depot", OrderType::Lite))
            .await?;

        let recent_from = orders.recent_from_addresses("u1").await?;
        let recent_to = orders.recent_to_addresses("u1").await?;
        info!(?recent_from, ?recent_to, "Recent addresses");

        if let Some(cheapest) = orders.lowest_price_order("u1").await? {
            info!(id = %cheapest.id, price = cheapest.price, "Cheapest order");
        }
        let pool = orders.list_orders("d1", Role::Driver).await?;
        info!(open = pool.len(), "Orders visible to drivers");

        Ok::<_, delivery_orders::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
