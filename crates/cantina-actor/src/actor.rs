//! # Generic Actor Server
//!
//! `ResourceActor` owns the [`Store`] for one resource type and processes requests strictly one
//! at a time. That sequential loop is what the rest of the system relies on for consistency:
//! a command such as "activate menu 3" runs to completion (or rolls back) before any other
//! request to the same actor is looked at.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::Store;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use cantina_actor::{ActorEntity, ResourceActor, Store, Transaction, Unsupported};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = u32;
///     type Update = Unsupported;
///     type Action = Unsupported;
///     type ActionResult = ();
///     type Query = ();
///     type QueryResult = u32;
///     type Command = Unsupported;
///     type CommandResult = ();
///     type Context = ();
///     type Error = TableError;
///
///     fn from_create_params(id: u32, seats: u32) -> Result<Self, Self::Error> { Ok(Self { id, seats }) }
///     async fn on_update(&mut self, u: Unsupported, _: &()) -> Result<(), Self::Error> { match u {} }
///     async fn handle_action(&mut self, a: Unsupported, _: &()) -> Result<(), Self::Error> { match a {} }
///     async fn handle_query(store: &Store<Self>, _: (), _: &()) -> Result<u32, Self::Error> {
///         Ok(store.values().map(|t| t.seats).sum())
///     }
///     async fn handle_command<'s>(_: &mut Transaction<'s, Self>, c: Unsupported, _: &()) -> Result<(), Self::Error> {
///         match c {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Table>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(4).await.unwrap();
///     client.create(6).await.unwrap();
///     assert_eq!(client.query(()).await.unwrap(), 10);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity under the next id, runs `on_create`, then stores it. The id
///   counter only advances when the entity is stored.
/// * **Get / List**: clones out of the store; `List` is in ascending id order.
/// * **Update / Action**: run the hook on a working copy and store the copy only on success.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Query**: read-only over the whole store.
/// * **Command**: runs against a transaction; committed on `Ok`, discarded on `Err`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait while it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.store.peek_id();
                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.push(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let outcome = draft.on_update(update, &context).await;
                    match outcome {
                        Ok(()) => {
                            self.store.replace(id.clone(), draft.clone());
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let outcome = draft.handle_action(action, &context).await;
                    match outcome {
                        Ok(result) => {
                            self.store.replace(id.clone(), draft);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let result = T::handle_query(&self.store, query, &context)
                        .await
                        .map_err(|e| {
                            warn!(entity_type, error = %e, "Query failed");
                            FrameworkError::EntityError(Box::new(e))
                        });
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, ?command, "Command");
                    let mut tx = self.store.begin();
                    let outcome = T::handle_command(&mut tx, command, &context).await;
                    match outcome {
                        Ok(result) => {
                            let changes = tx.into_changes();
                            let writes = changes.len();
                            self.store.commit(changes);
                            info!(entity_type, writes, size = self.store.len(), "Committed");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Rolled back");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
