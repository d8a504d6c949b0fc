//! # Pricing Engine
//!
//! Turns a dish name, a side name and a quantity into a total, using the prices currently
//! stored in the menus.
//!
//! Prices are looked up by name across **every** menu ever created, not only the active one.
//! When the same name appears in several menus, the first match wins, scanning menus in
//! ascending id order and items in the order they were listed. Existing orders were priced
//! this way, so the rule is kept as is.
//!
//! All arithmetic is done in [`Decimal`] and rounded to cents, so `(18.50 + 4.00) * 2` is
//! exactly `45.00`.

use crate::clients::MenuClient;
use crate::error::{Classify, ErrorKind};
use crate::menu_actor::MenuError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors produced while pricing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Quantity was zero, negative or not a whole number.
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// The dish or side name is not on any menu.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The total does not fit in a [`Decimal`].
    #[error("Total out of range: {0}")]
    TotalOutOfRange(String),

    /// The menu store could not be consulted.
    #[error("Menu lookup failed: {0}")]
    Menu(#[from] MenuError),
}

impl Classify for PricingError {
    fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidQuantity(_) => ErrorKind::InvalidInput,
            PricingError::ItemNotFound(_) => ErrorKind::ItemNotFound,
            PricingError::TotalOutOfRange(_) => ErrorKind::InvalidInput,
            PricingError::Menu(e) => e.kind(),
        }
    }
}

/// Highest price a single menu item may carry (`1000000.00`).
pub const MAX_ITEM_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// A validated, strictly positive order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, PricingError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| PricingError::InvalidQuantity(value.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl FromStr for Quantity {
    type Err = PricingError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| PricingError::InvalidQuantity(text.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = PricingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

/// Rounds to cents and fixes the scale at two places (`45` becomes `45.00`).
pub fn to_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// `(dish_price + side_price) * quantity`, in cents.
///
/// Fails with [`PricingError::TotalOutOfRange`] instead of overflowing.
pub fn compute_total(
    dish_price: Decimal,
    side_price: Decimal,
    quantity: Quantity,
) -> Result<Decimal, PricingError> {
    dish_price
        .checked_add(side_price)
        .and_then(|unit| unit.checked_mul(Decimal::from(quantity.get())))
        .map(to_currency)
        .ok_or_else(|| {
            PricingError::TotalOutOfRange(format!(
                "({dish_price} + {side_price}) x {}",
                quantity.get()
            ))
        })
}

/// The breakdown behind an order total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub dish_price: Decimal,
    pub side_price: Decimal,
    pub quantity: Quantity,
    pub total: Decimal,
}

/// Prices orders against the menu store.
#[derive(Clone)]
pub struct PricingEngine {
    menus: MenuClient,
}

impl PricingEngine {
    pub fn new(menus: MenuClient) -> Self {
        Self { menus }
    }

    /// Resolves both prices by name and computes the total.
    ///
    /// Fails with [`PricingError::ItemNotFound`] unless both names resolve.
    #[instrument(skip(self))]
    pub async fn price_order(
        &self,
        dish: &str,
        side: &str,
        quantity: Quantity,
    ) -> Result<PriceQuote, PricingError> {
        let prices = self.menus.resolve_prices(dish, side).await?;
        debug!(?prices, "Resolved prices");

        let dish_price = prices
            .dish
            .ok_or_else(|| PricingError::ItemNotFound(format!("dish {dish:?}")))?;
        let side_price = prices
            .side
            .ok_or_else(|| PricingError::ItemNotFound(format!("side {side:?}")))?;

        let total = compute_total(dish_price, side_price, quantity)?;
        Ok(PriceQuote {
            dish_price,
            side_price,
            quantity,
            total,
        })
    }
}
