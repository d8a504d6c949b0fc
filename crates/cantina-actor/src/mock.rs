//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test an actor whose *dependencies*
//! are other actors: the order actor, for instance, prices submissions through the menu actor,
//! and a mocked menu client lets a test decide exactly which prices come back.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real store |
//! | **Error Injection** | `return_err` | Requires building the failing state |
//! | **Use Case** | Logic *around* a client | The actor itself or the full system |
//!
//! ```rust
//! use cantina_actor::mock::MockClient;
//! use cantina_actor::{ActorEntity, FrameworkError, Store, Transaction, Unsupported};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32, name: String }
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = String; type Update = Unsupported;
//!     type Action = Unsupported; type ActionResult = ();
//!     type Query = String; type QueryResult = Option<u32>;
//!     type Command = Unsupported; type CommandResult = ();
//!     type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, name: String) -> Result<Self, Self::Error> { Ok(Self { id, name }) }
//!     async fn on_update(&mut self, u: Unsupported, _: &()) -> Result<(), Self::Error> { match u {} }
//!     async fn handle_action(&mut self, a: Unsupported, _: &()) -> Result<(), Self::Error> { match a {} }
//!     async fn handle_query(s: &Store<Self>, name: String, _: &()) -> Result<Option<u32>, Self::Error> {
//!         Ok(s.values().find(|d| d.name == name).map(|d| d.id))
//!     }
//!     async fn handle_command<'s>(_: &mut Transaction<'s, Self>, c: Unsupported, _: &()) -> Result<(), Self::Error> {
//!         match c {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_query().return_ok(Some(7));
//!     mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.query("Feijoada".into()).await.unwrap(), Some(7));
//!     assert!(matches!(client.get(7).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For lower-level control, [`create_mock_client`] returns the raw receiver and the
//! `expect_*` helpers pull the next request off it so a test can answer by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// A scripted reply. `id` is checked against the request when the operation addresses one entity.
enum Expectation<T: ActorEntity> {
    Get(Option<T::Id>, Result<Option<T>, FrameworkError>),
    Create(Option<T::Id>, Result<T::Id, FrameworkError>),
    Update(Option<T::Id>, Result<T, FrameworkError>),
    Delete(Option<T::Id>, Result<(), FrameworkError>),
    Action(Option<T::Id>, Result<T::ActionResult, FrameworkError>),
    List(Option<T::Id>, Result<Vec<T>, FrameworkError>),
    Query(Option<T::Id>, Result<T::QueryResult, FrameworkError>),
    Command(Option<T::Id>, Result<T::CommandResult, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_id<I: PartialEq + std::fmt::Debug>(kind: &str, expected: Option<I>, actual: &I) {
    if let Some(expected) = expected {
        assert_eq!(&expected, actual, "{kind} request addressed the wrong id");
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

macro_rules! expectation_builder {
    ($variant:ident, $value:ty) => {
        paste::paste! {
            #[doc = concat!("Builder for `", stringify!($variant), "` expectations.")]
            pub struct [<$variant ExpectationBuilder>]<T: ActorEntity> {
                id: Option<T::Id>,
                expectations: Expectations<T>,
            }

            impl<T: ActorEntity> [<$variant ExpectationBuilder>]<T> {
                /// Replies with a successful result.
                pub fn return_ok(self, value: $value) {
                    lock(&self.expectations).push_back(Expectation::$variant(self.id, Ok(value)));
                }

                /// Replies with an error.
                pub fn return_err(self, error: FrameworkError) {
                    lock(&self.expectations).push_back(Expectation::$variant(self.id, Err(error)));
                }
            }
        }
    };
}

expectation_builder!(Get, Option<T>);
expectation_builder!(Create, T::Id);
expectation_builder!(Update, T);
expectation_builder!(Delete, ());
expectation_builder!(Action, T::ActionResult);
expectation_builder!(List, Vec<T>);
expectation_builder!(Query, T::QueryResult);
expectation_builder!(Command, T::CommandResult);

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared; a request that does not match
/// the next expectation panics the mock task, which surfaces as `ActorDropped` at the caller.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                let kind = request.kind();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(want, response))) => {
                        check_id(kind, want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(_, response))) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update(want, response))) => {
                        check_id(kind, want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(want, response))) => {
                        check_id(kind, want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action(want, response))) => {
                        check_id(kind, want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(_, response))) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query(_, response))) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Command { respond_to, .. }, Some(Expectation::Command(_, response))) => {
                        reply(respond_to, response);
                    }
                    (_, None) => panic!("Unexpected {kind} request: no expectations left"),
                    (_, Some(_)) => panic!("Unexpected {kind} request: next expectation differs"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id: Some(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            id: None,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id: Some(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id: Some(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id: Some(id),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            id: None,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            id: None,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            id: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Takes the next request if it is a Query.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<T::QueryResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is a Command.
pub async fn expect_command<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Command, Response<T::CommandResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
