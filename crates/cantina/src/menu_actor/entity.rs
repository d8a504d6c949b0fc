//! [`ActorEntity`] implementation for [`MenuCatalog`].
//!
//! A catalog and all of its items are built in `from_create_params`, so a create either stores
//! the complete menu or nothing. Activation runs as a [`MenuCommand`] inside a transaction.

use super::{MenuCommand, MenuCommandResult, MenuError, MenuQuery, MenuQueryResult};
use crate::model::{MenuCatalog, MenuCreate, MenuId, MenuItem, ResolvedPrices};
use crate::pricing::{to_currency, MAX_ITEM_PRICE};
use async_trait::async_trait;
use cantina_actor::{ActorEntity, Store, Transaction, Unsupported};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

/// Parses a `"name;price"` line.
///
/// The name is trimmed. `"4,50"` reads as `4.50`. A missing price counts as `0.00`, and so
/// does any field that is not a plain number as a whole: `"12 reais"` and `"12abc"` are
/// `0.00`, not `12.00`. Empty names, negative prices and prices above [`MAX_ITEM_PRICE`]
/// are rejected.
pub fn parse_line(line: &str) -> Result<MenuItem, MenuError> {
    let mut fields = line.split(';');
    let name = fields.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(MenuError::InvalidInput(format!("item without a name: {line:?}")));
    }

    let price = fields.next().map(parse_price).unwrap_or(Decimal::ZERO);
    if price < Decimal::ZERO {
        return Err(MenuError::InvalidInput(format!("negative price for {name:?}")));
    }
    if price > MAX_ITEM_PRICE {
        return Err(MenuError::InvalidInput(format!("price too high for {name:?}")));
    }

    Ok(MenuItem::new(name, to_currency(price)))
}

fn parse_price(text: &str) -> Decimal {
    let text = text.trim().replace(',', ".");
    Decimal::from_str(&text).unwrap_or(Decimal::ZERO)
}

fn parse_items(lines: &[String], section: &str) -> Result<Vec<MenuItem>, MenuError> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = parse_line(line)?;
        if !seen.insert(item.name.clone()) {
            return Err(MenuError::InvalidInput(format!(
                "{section} {:?} listed twice",
                item.name
            )));
        }
        items.push(item);
    }
    Ok(items)
}

#[async_trait]
impl ActorEntity for MenuCatalog {
    type Id = MenuId;
    type Create = MenuCreate;
    type Update = Unsupported;
    type Action = Unsupported;
    type ActionResult = ();
    type Query = MenuQuery;
    type QueryResult = MenuQueryResult;
    type Command = MenuCommand;
    type CommandResult = MenuCommandResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(MenuError::InvalidInput("menu name is required".into()));
        }
        if params.dishes.is_empty() {
            return Err(MenuError::InvalidInput("at least one dish is required".into()));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            active: false,
            dishes: parse_items(&params.dishes, "dish")?,
            sides: parse_items(&params.sides, "side")?,
        })
    }

    async fn on_update(&mut self, update: Unsupported, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Unsupported, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    async fn handle_query(
        store: &Store<Self>,
        query: MenuQuery,
        _ctx: &(),
    ) -> Result<MenuQueryResult, Self::Error> {
        match query {
            MenuQuery::Active => store
                .values()
                .find(|menu| menu.active)
                .cloned()
                .map(MenuQueryResult::Active)
                .ok_or(MenuError::NoActiveMenu),
            MenuQuery::ResolvePrices { dish, side } => {
                let prices = ResolvedPrices {
                    dish: store
                        .values()
                        .find_map(|menu| menu.dish(&dish))
                        .map(|item| item.price),
                    side: store
                        .values()
                        .find_map(|menu| menu.side(&side))
                        .map(|item| item.price),
                };
                Ok(MenuQueryResult::Prices(prices))
            }
        }
    }

    async fn handle_command<'s>(
        tx: &mut Transaction<'s, Self>,
        command: MenuCommand,
        _ctx: &(),
    ) -> Result<MenuCommandResult, Self::Error> {
        match command {
            MenuCommand::Activate(target) => {
                tx.for_each_mut(|menu| menu.active = false);
                let menu = tx
                    .get_mut(&target)
                    .ok_or_else(|| MenuError::NotFound(target.to_string()))?;
                menu.active = true;
                Ok(MenuCommandResult::Activated(menu.clone()))
            }
        }
    }
}
