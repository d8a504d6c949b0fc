//! Type-safe wrappers around [`ResourceClient`](cantina_actor::ResourceClient), one per resource.
//!
//! Each client implements [`ActorClient`](cantina_actor::ActorClient) and recovers the
//! resource's own error from the boxed entity error, so a `MenuError::NotFound` raised inside
//! the menu actor reaches the caller as the same variant.

pub mod customer_client;
pub mod menu_client;
pub mod order_client;

pub use customer_client::*;
pub use menu_client::*;
pub use order_client::*;
