//! # Cantina
//!
//! Order-taking and menu management for a small food-service business.
//!
//! - **[model]**: menus, orders and customers as plain data.
//! - **[menu_actor]**, **[order_actor]**, **[customer_actor]**: one resource actor each.
//! - **[pricing]**: totals from current menu prices, in exact cents.
//! - **[clients]**: typed handles to the actors.
//! - **[api]**: the operations the web layer calls, with serializable payloads.
//! - **[lifecycle]**: starting and stopping the whole system.

pub mod api;
pub mod clients;
pub mod clock;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod pricing;
