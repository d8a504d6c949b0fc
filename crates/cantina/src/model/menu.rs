/// A named menu (catalog) of dishes and side dishes.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](cantina_actor::ResourceActor); see
/// [`impl ActorEntity for MenuCatalog`](#impl-ActorEntity-for-MenuCatalog) for creation,
/// activation and price resolution.
///
/// Items belong to exactly one catalog and live inside it, so creating a catalog stores all
/// of its items at once and deleting it removes them with it.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A priced dish or side dish line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    pub id: MenuId,
    pub name: String,
    pub active: bool,
    pub dishes: Vec<MenuItem>,
    pub sides: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn dish(&self, name: &str) -> Option<&MenuItem> {
        self.dishes.iter().find(|item| item.name == name)
    }

    pub fn side(&self, name: &str) -> Option<&MenuItem> {
        self.sides.iter().find(|item| item.name == name)
    }

    pub fn dish_names(&self) -> Vec<String> {
        self.dishes.iter().map(|item| item.name.clone()).collect()
    }

    pub fn side_names(&self) -> Vec<String> {
        self.sides.iter().map(|item| item.name.clone()).collect()
    }
}

/// Payload for creating a menu.
///
/// Each line is encoded as `"name;price"`, e.g. `"Feijoada;18.50"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub dishes: Vec<String>,
    #[serde(default)]
    pub sides: Vec<String>,
}

/// Prices found for one dish name and one side name across every menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedPrices {
    pub dish: Option<Decimal>,
    pub side: Option<Decimal>,
}
