//! # Menu Actor
//!
//! Owns every [`MenuCatalog`] and enforces that at most one of them is active.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](cantina_actor::ActorEntity) implementation and line parsing
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuQuery`] and [`MenuCommand`] with their results
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Activation
//!
//! Activation is a store-wide [`MenuCommand::Activate`]: every menu is deactivated and the
//! target activated inside one transaction. If the target does not exist the transaction is
//! dropped, so the previously active menu stays active. Because the actor handles one request
//! at a time, no reader ever sees zero or two active menus in between.
//!
//! ## Usage
//!
//! ```rust
//! use cantina::clients::MenuClient;
//! use cantina::menu_actor;
//! use cantina::model::MenuCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = menu_actor::new(8);
//!     let menus = MenuClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = menus
//!         .create_menu(MenuCreate {
//!             name: "Segunda".into(),
//!             dishes: vec!["Feijoada;18.50".into()],
//!             sides: vec!["Arroz;4.00".into()],
//!         })
//!         .await?;
//!     menus.activate(id).await?;
//!     assert_eq!(menus.active().await?.id, id);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::parse_line;
pub use error::*;

use crate::model::MenuCatalog;
use cantina_actor::{ResourceActor, ResourceClient};

/// Creates a new Menu actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<MenuCatalog>, ResourceClient<MenuCatalog>) {
    ResourceActor::new(capacity)
}
