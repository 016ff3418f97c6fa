use crate::address_actor::AddressError;
use crate::clients::{AddressClient, OrderClient};
use crate::config::{AddressSeed, Config};
use crate::order_actor::{OrderContext, TransitionTable};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to seed address directory: {0}")]
    AddressSeed(#[from] AddressError),
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}

/// Owns the running Address and Order actors.
///
/// The Order actor depends on the Address Directory (to resolve endpoints at
/// creation), and on the pricing engine and transition table, which are built
/// once here and shared by `Arc`.
///
/// ```ignore
/// let system = DeliverySystem::start(&config).await?;
/// let order = system.order_client.create_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub address_client: AddressClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Spawns both actors with an empty address directory. Must be called
    /// inside a tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (address_actor, address_client) = crate::address_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        let context = OrderContext::new(
            address_client.clone(),
            Arc::new(config.pricing.build()),
            Arc::new(TransitionTable::default()),
        );

        let address_handle = tokio::spawn(address_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(context));

        Self {
            address_client,
            order_client,
            handles: vec![address_handle, order_handle],
        }
    }

    /// Spawns both actors and registers the configured addresses.
    pub async fn start(config: &Config) -> Result<Self, LifecycleError> {
        let system = Self::new(config);
        system.seed_addresses(&config.addresses).await?;
        Ok(system)
    }

    pub async fn seed_addresses(&self, seeds: &[AddressSeed]) -> Result<(), LifecycleError> {
        for seed in seeds {
            self.address_client
                .register(&seed.name, seed.location())
                .await?;
        }
        info!(count = seeds.len(), "Address directory seeded");
        Ok(())
    }

    /// Drops the clients and waits for both actors to drain and stop.
    ///
    /// The Order actor holds an `AddressClient` in its context, so the Address
    /// actor only stops once the Order actor has.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.address_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::ActorPanicked(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
