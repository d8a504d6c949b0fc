//! # Cantina Actor Runtime
//!
//! Resource actors for the cantina backend. Each resource type (menus, orders, customers) is
//! owned by one [`ResourceActor`] that keeps its entities in an ordered in-memory [`Store`] and
//! handles requests one at a time. That gives every resource type serializable isolation
//! without locks: a request never observes another request half-applied.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its DTOs and its hooks.
//! 2. **Runtime** ([`ResourceActor`], [`Store`], [`Transaction`]) - mailbox loop and state.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async handles.
//!
//! ## Operations
//!
//! Besides CRUD and per-entity actions, an entity can declare:
//! - a **Query**, evaluated read-only over the whole store (e.g. "the active menu"), and
//! - a **Command**, evaluated against a [`Transaction`] and committed only on success
//!   (e.g. "deactivate every menu, then activate menu 3").
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor. The order actor
//! is started with the menu client as its context so it can price submissions:
//!
//! ```rust,ignore
//! let (menu_actor, menus) = ResourceActor::<MenuCatalog>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//! tokio::spawn(menu_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext::new(PricingEngine::new(MenuClient::new(menus)), clock)));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from scripted expectations, so an
//! actor can be tested with its dependencies mocked out.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Unsupported};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{Changes, Store, Transaction};
