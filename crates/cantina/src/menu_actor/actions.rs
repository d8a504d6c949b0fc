//! Queries and commands understood by the Menu actor.
//!
//! Menus have no per-entity actions or updates: a menu is created whole and only its
//! `active` flag ever changes, always through [`MenuCommand::Activate`] so that the
//! single-active rule holds across the whole store.

use crate::model::{MenuCatalog, MenuId, ResolvedPrices};

/// Read-only lookups over every stored menu.
#[derive(Debug, Clone)]
pub enum MenuQuery {
    /// The currently active menu.
    Active,
    /// First price found for each name, scanning menus in id order.
    ResolvePrices { dish: String, side: String },
}

/// Results from [`MenuQuery`] - variants match 1:1.
#[derive(Debug, Clone)]
pub enum MenuQueryResult {
    Active(MenuCatalog),
    Prices(ResolvedPrices),
}

/// Store-wide mutations.
#[derive(Debug, Clone, Copy)]
pub enum MenuCommand {
    /// Deactivates every menu and activates the given one, as one step.
    Activate(MenuId),
}

/// Results from [`MenuCommand`] - variants match 1:1.
#[derive(Debug, Clone)]
pub enum MenuCommandResult {
    Activated(MenuCatalog),
}
