//! Request and response bodies exchanged with the web layer.
//!
//! Field names follow the existing front end: replies carrying a new id use camelCase
//! (`orderId`, `menuId`), everything else serializes as declared.

use crate::error::ErrorKind;
use crate::model::{CustomerId, MenuCatalog, MenuId, MenuItem, OrderId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

/// The structured failure payload. Only `status` and `message` are serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{code} {message}")]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip)]
    pub kind: ErrorKind,
    #[serde(skip)]
    pub code: u16,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            kind,
            code: kind.status_code(),
        }
    }
}

/// `{status, message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ack {
    pub status: &'static str,
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub status: &'static str,
    pub message: String,
    pub order_id: OrderId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreated {
    pub status: &'static str,
    pub message: String,
    pub menu_id: MenuId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegistered {
    pub status: &'static str,
    pub message: String,
    pub customer_id: CustomerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderCount {
    pub total: usize,
}

/// The active menu with priced dishes and sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveMenu {
    pub id: MenuId,
    pub name: String,
    pub dishes: Vec<MenuItem>,
    pub sides: Vec<MenuItem>,
}

impl From<MenuCatalog> for ActiveMenu {
    fn from(menu: MenuCatalog) -> Self {
        Self {
            id: menu.id,
            name: menu.name,
            dishes: menu.dishes,
            sides: menu.sides,
        }
    }
}

/// One row of the admin menu list: dish names only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuListing {
    pub id: MenuId,
    pub name: String,
    pub active: bool,
    pub dishes: Vec<String>,
}

impl From<&MenuCatalog> for MenuListing {
    fn from(menu: &MenuCatalog) -> Self {
        Self {
            id: menu.id,
            name: menu.name.clone(),
            active: menu.active,
            dishes: menu.dish_names(),
        }
    }
}

/// Order form as submitted; `quantity` is still raw text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderForm {
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub dish: String,
    pub side: String,
    pub quantity: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub proof: Option<String>,
    /// Filled in from the session, never from the request body.
    #[serde(skip)]
    pub customer_id: Option<CustomerId>,
}
