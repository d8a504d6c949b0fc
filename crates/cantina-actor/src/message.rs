//! # Generic Messages
//!
//! The request envelope sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The CRUD variants plus `Action` address a single entity; `List`, `Query` and `Command`
/// address the whole store. Every variant carries its own typed response channel, so a
/// "menu" payload can never be sent to the "order" actor.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
    Command {
        command: T::Command,
        respond_to: Response<T::CommandResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the operation, used in logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Action { .. } => "Action",
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Query { .. } => "Query",
            ResourceRequest::Command { .. } => "Command",
        }
    }
}
