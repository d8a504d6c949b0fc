//! # Cantina API
//!
//! The operations the web layer calls, independent of any HTTP framework. Inputs arrive as the
//! web layer receives them (ids, quantities and status labels as text); every method returns a
//! serializable success payload or an [`ErrorBody`] whose `code` is the HTTP status to send.
//!
//! Internal error text is logged, never returned: an [`ErrorBody`] message is a fixed sentence
//! for its [`ErrorKind`], naming at most the id the caller sent.
//!
//! | Operation | Success payload |
//! |-----------|-----------------|
//! | `submit_order` | `{status, message, orderId}` |
//! | `list_orders` | full orders, newest first |
//! | `count_today` | `{total}` |
//! | `get_order` | reduced [`OrderSummary`] |
//! | `set_status` / `advance_order` | `{status, message}` |
//! | `active_menu` | `{id, name, dishes:[{name, price}], sides:[{name, price}]}` |
//! | `list_menus` | `[{id, name, active, dishes:[name]}]` |
//! | `create_menu` | `{status, message, menuId}` |
//! | `activate_menu` / `delete_menu` | `{status, message}` |

pub mod payload;

pub use payload::*;

use crate::clients::{CustomerClient, MenuClient, OrderClient};
use crate::error::{Classify, ErrorKind};
use crate::model::{
    CustomerCreate, CustomerId, MenuCreate, MenuId, Order, OrderId, OrderSubmission, OrderSummary,
};
use crate::pricing::Quantity;
use cantina_actor::ActorClient;
use std::fmt::Display;
use tracing::{info, instrument, warn};

/// Logs the real error and turns it into a caller-safe payload.
fn reject<E: Classify + Display>(err: E, subject: &str) -> ErrorBody {
    let kind = err.kind();
    warn!(%kind, error = %err, "Request failed");
    let message = match kind {
        ErrorKind::InvalidInput => "Invalid or missing fields.".to_string(),
        ErrorKind::ItemNotFound => "Dish or side is not on any menu.".to_string(),
        ErrorKind::NotFound => format!("{subject} not found."),
        ErrorKind::Conflict => "Email already registered.".to_string(),
        ErrorKind::StoreError => "Internal server error.".to_string(),
        ErrorKind::InvalidStatus => "Invalid status.".to_string(),
    };
    ErrorBody::new(kind, message)
}

fn parse_id<I: From<u32>>(text: &str, what: &str) -> Result<I, ErrorBody> {
    text.trim().parse::<u32>().map(I::from).map_err(|_| {
        warn!(id = text, "Malformed {what} id");
        ErrorBody::new(ErrorKind::InvalidInput, format!("Invalid {what} id."))
    })
}

/// Facade over the resource clients. Cheap to clone.
#[derive(Clone)]
pub struct CantinaApi {
    menus: MenuClient,
    orders: OrderClient,
    customers: CustomerClient,
}

impl CantinaApi {
    pub fn new(menus: MenuClient, orders: OrderClient, customers: CustomerClient) -> Self {
        Self {
            menus,
            orders,
            customers,
        }
    }

    // --- Orders ---

    #[instrument(skip(self))]
    pub async fn submit_order(&self, form: OrderForm) -> Result<OrderPlaced, ErrorBody> {
        let quantity: Quantity = form.quantity.parse().map_err(|e| reject(e, "Order"))?;
        let submission = OrderSubmission {
            customer_name: form.customer_name,
            phone: form.phone,
            address: form.address,
            dish: form.dish,
            side: form.side,
            quantity,
            note: form.note,
            payment_method: form.payment_method,
            proof: form.proof,
            customer_id: form.customer_id,
        };

        let order_id = self
            .orders
            .submit(submission)
            .await
            .map_err(|e| reject(e, "Order"))?;
        info!(%order_id, "Order received");
        Ok(OrderPlaced {
            status: SUCCESS,
            message: "Order received and saved!".into(),
            order_id,
        })
    }

    /// Every order, newest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ErrorBody> {
        self.orders
            .list_newest_first()
            .await
            .map_err(|e| reject(e, "Orders"))
    }

    pub async fn count_today(&self) -> Result<OrderCount, ErrorBody> {
        let total = self
            .orders
            .count_today()
            .await
            .map_err(|e| reject(e, "Orders"))?;
        Ok(OrderCount { total })
    }

    pub async fn get_order(&self, id: &str) -> Result<OrderSummary, ErrorBody> {
        let id: OrderId = parse_id(id, "order")?;
        self.orders
            .summary(id)
            .await
            .map_err(|e| reject(e, &format!("Order #{}", id.0)))
    }

    /// Sets any of the four status labels, whatever the current one.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: &str, status: &str) -> Result<Ack, ErrorBody> {
        let id: OrderId = parse_id(id, "order")?;
        let order = self
            .orders
            .set_status(id, status)
            .await
            .map_err(|e| reject(e, &format!("Order #{}", id.0)))?;
        Ok(Ack::new(format!(
            "Order #{} status updated to {}",
            id.0, order.status
        )))
    }

    /// Moves an order to the next status; a delivered order is refused.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, id: &str) -> Result<Ack, ErrorBody> {
        let id: OrderId = parse_id(id, "order")?;
        let status = self
            .orders
            .advance(id)
            .await
            .map_err(|e| reject(e, &format!("Order #{}", id.0)))?;
        Ok(Ack::new(format!("Order #{} status updated to {status}", id.0)))
    }

    /// A customer's orders, newest first.
    pub async fn order_history(&self, customer_id: &str) -> Result<Vec<Order>, ErrorBody> {
        let id: CustomerId = parse_id(customer_id, "customer")?;
        self.orders
            .history(id)
            .await
            .map_err(|e| reject(e, "Customer"))
    }

    // --- Menus ---

    pub async fn active_menu(&self) -> Result<ActiveMenu, ErrorBody> {
        self.menus
            .active()
            .await
            .map(ActiveMenu::from)
            .map_err(|e| reject(e, "Active menu"))
    }

    pub async fn list_menus(&self) -> Result<Vec<MenuListing>, ErrorBody> {
        let menus = self
            .menus
            .list_all()
            .await
            .map_err(|e| reject(e, "Menus"))?;
        Ok(menus.iter().map(MenuListing::from).collect())
    }

    /// `dishes` and `sides` hold `"name;price"` lines.
    #[instrument(skip(self))]
    pub async fn create_menu(
        &self,
        name: &str,
        dishes: &[String],
        sides: &[String],
    ) -> Result<MenuCreated, ErrorBody> {
        let menu_id = self
            .menus
            .create_menu(MenuCreate {
                name: name.to_string(),
                dishes: dishes.to_vec(),
                sides: sides.to_vec(),
            })
            .await
            .map_err(|e| reject(e, "Menu"))?;
        Ok(MenuCreated {
            status: SUCCESS,
            message: "Menu added successfully!".into(),
            menu_id,
        })
    }

    #[instrument(skip(self))]
    pub async fn activate_menu(&self, id: &str) -> Result<Ack, ErrorBody> {
        let id: MenuId = parse_id(id, "menu")?;
        self.menus
            .activate(id)
            .await
            .map_err(|e| reject(e, &format!("Menu {}", id.0)))?;
        Ok(Ack::new(format!("Menu {} activated!", id.0)))
    }

    #[instrument(skip(self))]
    pub async fn delete_menu(&self, id: &str) -> Result<Ack, ErrorBody> {
        let id: MenuId = parse_id(id, "menu")?;
        self.menus
            .delete_menu(id)
            .await
            .map_err(|e| reject(e, &format!("Menu {}", id.0)))?;
        Ok(Ack::new("Menu deleted successfully!"))
    }

    // --- Customers ---

    #[instrument(skip(self))]
    pub async fn register_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerRegistered, ErrorBody> {
        let customer_id = self
            .customers
            .register(params)
            .await
            .map_err(|e| reject(e, "Customer"))?;
        Ok(CustomerRegistered {
            status: SUCCESS,
            message: "Registration complete!".into(),
            customer_id,
        })
    }
}
