//! # Menu Client
//!
//! Provides a high-level API for interacting with the `MenuCatalog` actor.
use crate::menu_actor::{MenuCommand, MenuCommandResult, MenuError, MenuQuery, MenuQueryResult};
use crate::model::{MenuCatalog, MenuCreate, MenuId, ResolvedPrices};
use async_trait::async_trait;
use cantina_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuCatalog>,
}

#[async_trait]
impl ActorClient<MenuCatalog> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuCatalog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuCatalog>) -> Self {
        Self { inner }
    }

    /// Stores a new, inactive menu with all of its items.
    #[instrument(skip(self))]
    pub async fn create_menu(&self, params: MenuCreate) -> Result<MenuId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Makes `id` the only active menu.
    #[instrument(skip(self))]
    pub async fn activate(&self, id: MenuId) -> Result<MenuCatalog, MenuError> {
        debug!("Activating menu {}", id);
        let MenuCommandResult::Activated(menu) = self
            .inner
            .command(MenuCommand::Activate(id))
            .await
            .map_err(Self::map_error)?;
        Ok(menu)
    }

    /// The active menu, or [`MenuError::NoActiveMenu`].
    #[instrument(skip(self))]
    pub async fn active(&self) -> Result<MenuCatalog, MenuError> {
        match self
            .inner
            .query(MenuQuery::Active)
            .await
            .map_err(Self::map_error)?
        {
            MenuQueryResult::Active(menu) => Ok(menu),
            other => Err(unexpected(other)),
        }
    }

    /// Deletes a menu and its items. Deleting the active menu leaves none active.
    #[instrument(skip(self))]
    pub async fn delete_menu(&self, id: MenuId) -> Result<(), MenuError> {
        self.remove(id).await
    }

    /// First price for each name across every menu.
    #[instrument(skip(self))]
    pub async fn resolve_prices(&self, dish: &str, side: &str) -> Result<ResolvedPrices, MenuError> {
        let query = MenuQuery::ResolvePrices {
            dish: dish.to_string(),
            side: side.to_string(),
        };
        match self.inner.query(query).await.map_err(Self::map_error)? {
            MenuQueryResult::Prices(prices) => Ok(prices),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: MenuQueryResult) -> MenuError {
    MenuError::ActorCommunicationError(format!("unexpected reply: {reply:?}"))
}
