//! # System Lifecycle
//!
//! Creates the resource actors, injects their dependencies and shuts them down in order.
//!
//! ## Wiring
//!
//! Actors are constructed without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! let (menu_actor, menus) = menu_actor::new(capacity);
//! let (order_actor, orders) = order_actor::new(capacity);
//! tokio::spawn(menu_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext::new(PricingEngine::new(menu_client), clock)));
//! ```
//!
//! The dependency graph is acyclic (orders depend on menus, nothing depends on orders), so
//! closing the mailboxes is enough to stop everything: drop the clients, await the order and
//! customer actors, then the menu actor once the order actor has released its menu client.
//!
//! ## Tracing
//!
//! Logging is initialised by [`setup_tracing`](cantina_actor::tracing::setup_tracing) and
//! filtered with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and writes
//! RUST_LOG=debug cargo run     # every request with its payload
//! ```

pub mod cantina_system;

pub use cantina_system::*;
