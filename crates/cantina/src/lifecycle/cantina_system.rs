use crate::api::CantinaApi;
use crate::clients::{CustomerClient, MenuClient, OrderClient};
use crate::clock::{Clock, SystemClock};
use crate::config::CantinaConfig;
use crate::order_actor::OrderContext;
use crate::pricing::PricingEngine;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts, wires and stops the cantina's resource actors.
///
/// Three actors run:
/// - **Menu Actor**: menus and the single active menu (no dependencies)
/// - **Order Actor**: orders, priced through the menu actor and stamped by the clock
/// - **Customer Actor**: accounts and reset tokens (needs the clock)
///
/// # Example
///
/// ```ignore
/// let system = CantinaSystem::new(&CantinaConfig::default());
/// let api = system.api();
/// let menu = api.create_menu("Segunda", &["Feijoada;18.50".into()], &[]).await?;
/// drop(api);
/// system.shutdown().await?;
/// ```
pub struct CantinaSystem {
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub customer_client: CustomerClient,
    pub clock: Arc<dyn Clock>,

    /// Task handles in shutdown order: dependents before the menu actor they call.
    handles: Vec<JoinHandle<()>>,
}

impl CantinaSystem {
    /// Starts every actor using the local system clock. Must be called inside a Tokio runtime.
    pub fn new(config: &CantinaConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Starts every actor with an injected clock.
    pub fn with_clock(config: &CantinaConfig, clock: Arc<dyn Clock>) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors (no dependencies)
        let (menu_actor, menus) = crate::menu_actor::new(capacity);
        let (order_actor, orders) = crate::order_actor::new(capacity);
        let (customer_actor, customers) = crate::customer_actor::new(capacity);
        let menu_client = MenuClient::new(menus);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext::new(
            PricingEngine::new(menu_client.clone()),
            clock.clone(),
        )));
        let customer_handle = tokio::spawn(customer_actor.run(clock.clone()));

        info!(capacity, "Cantina system started");
        Self {
            menu_client,
            order_client: OrderClient::new(orders),
            customer_client: CustomerClient::new(customers),
            clock,
            handles: vec![order_handle, customer_handle, menu_handle],
        }
    }

    /// A transport-agnostic facade over clones of the clients.
    ///
    /// Drop every facade before calling [`CantinaSystem::shutdown`]; a live facade keeps its
    /// actors running.
    pub fn api(&self) -> CantinaApi {
        CantinaApi::new(
            self.menu_client.clone(),
            self.order_client.clone(),
            self.customer_client.clone(),
        )
    }

    /// Closes every mailbox and waits for the actors to drain.
    ///
    /// The order actor holds a menu client in its context, so it is awaited first; the menu
    /// actor only stops once that last clone is gone.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down cantina system...");
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Cantina system shutdown complete.");
        Ok(())
    }
}
