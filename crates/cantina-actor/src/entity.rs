//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (menus, orders, customers) implements
//! to be managed by the generic [`ResourceActor`](crate::ResourceActor). It names the DTOs,
//! actions, queries and commands the resource understands, and provides the lifecycle hooks the
//! actor calls while processing its mailbox.
//!
//! # Three kinds of operation
//! - **Per-entity** operations (`create`, `update`, `delete`, `action`) touch exactly one entity.
//! - **Queries** read the whole [`Store`] (e.g. "which menu is active?").
//! - **Commands** mutate any number of entities through a [`Transaction`]. The actor commits the
//!   transaction only when the command returns `Ok`, so a failed command leaves no trace.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use crate::store::{Store, Transaction};
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Uninhabited placeholder for operations a resource does not support.
///
/// Use it as `Update`, `Action`, `Query` or `Command` and match on it with `match op {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` associated type is injected
/// into every hook when the actor starts (`run(context)`), not when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential ID generation, and ordered so that
    /// listings and lookups are deterministic.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operation on a single entity.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Read-only request evaluated against the whole store.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// Mutation spanning several entities, applied atomically.
    type Command: Send + Sync + Debug;

    /// The result type returned by commands.
    type CommandResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// Errors cross the actor boundary boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError); typed clients
    /// recover them with [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// Returning an error discards the entity and its reserved id.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on a working copy of the entity; the copy replaces the stored entity only on `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action. Same working-copy rule as `on_update`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Answer a read-only query over every stored entity.
    async fn handle_query(
        store: &Store<Self>,
        query: Self::Query,
        ctx: &Self::Context,
    ) -> Result<Self::QueryResult, Self::Error>;

    /// Apply a multi-entity command. Changes staged on `tx` are committed only on `Ok`.
    async fn handle_command<'s>(
        tx: &mut Transaction<'s, Self>,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::CommandResult, Self::Error>;
}
