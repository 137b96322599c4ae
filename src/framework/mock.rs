//! # Mock Framework
//!
//! Test doubles for code that talks to a [`ResourceActor`](crate::framework::ResourceActor)
//! through a [`ResourceClient`], without spawning the real actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | scripted responses | real sessions |
//! | **Use case** | code *around* the client (error mapping, trackers) | the actor, full system |
//! | **Error injection** | `return_err` | needs the right state |
//!
//! Two styles are available:
//! - [`MockClient`]: queue expectations up front, then [`MockClient::verify`].
//! - [`create_mock_client`] + [`expect_action`] / [`expect_get`] / [`expect_delete`]:
//!   receive the raw request and answer it by hand.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<(Option<<T as ActorEntity>::Id>, Expectation<T>)>>>;

/// A mock client with expectation tracking.
///
/// Requests are answered strictly in the order expectations were queued. A request that
/// does not match the next expectation (wrong kind or wrong id) panics the mock task, which
/// surfaces in the test as [`FrameworkError::NoReply`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Session>::new();
/// mock.expect_action(SessionId(1))
///     .return_ok(SessionActionResult::AdvanceOrder(TickOutcome::Stale));
/// let client = mock.client();
/// // ... exercise code using `client` ...
/// mock.verify();
/// ```
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
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queued = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                if matches!(request, ResourceRequest::Shutdown) {
                    receiver.close();
                    continue;
                }
                let next = queued.lock().unwrap().pop_front();
                let Some((want, expectation)) = next else {
                    panic!("Unexpected request: no expectations left");
                };

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Expectation::Get { response }) => {
                        assert_id(&want, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Expectation::Create { response },
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Expectation::Delete { response },
                    ) => {
                        assert_id(&want, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Expectation::Action { response },
                    ) => {
                        assert_id(&want, &id);
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Request does not match the next expectation"),
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

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(Some(id), self.expectations.clone(), |response| {
            Expectation::Get { response }
        })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(None, self.expectations.clone(), |response| {
            Expectation::Create { response }
        })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(Some(id), self.expectations.clone(), |response| {
            Expectation::Delete { response }
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(Some(id), self.expectations.clone(), |response| {
            Expectation::Action { response }
        })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn assert_id<I: PartialEq + std::fmt::Debug>(want: &Option<I>, got: &I) {
    if let Some(want) = want {
        assert_eq!(want, got, "request addressed to unexpected id");
    }
}

/// Builder that queues one expectation once a response is chosen.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    expectations: Expectations<T>,
    make: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        id: Option<T::Id>,
        expectations: Expectations<T>,
        make: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self {
            id,
            expectations,
            make,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.id, expectation));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.id, expectation));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off `receiver` and answers through the
/// embedded one-shot sender, which makes timing and failure injection fully deterministic.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate;

    #[derive(Debug)]
    enum CounterAction {
        Bump,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Action = CounterAction;
        type ActionResult = i64;
        type Context = ();
        type Error = CounterError;

        fn from_create(id: u32, _: CounterCreate) -> Self {
            Self { id, value: 0 }
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _: &(),
        ) -> Result<i64, Self::Error> {
            match action {
                CounterAction::Bump => {
                    self.value += 1;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_raw_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Counter>(10);

        let bump =
            tokio::spawn(async move { client.perform_action(7, CounterAction::Bump).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 7);
        assert!(matches!(action, CounterAction::Bump));
        responder.send(Ok(41)).unwrap();

        assert_eq!(bump.await.unwrap().unwrap(), 41);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Counter { id: 1, value: 3 }));
        mock.expect_delete(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();
        assert_eq!(client.create(CounterCreate).await.unwrap(), 1);
        assert_eq!(client.get(1).await.unwrap().unwrap().value, 3);
        assert!(matches!(
            client.delete(1).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_shutdown_closes_mock() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_get(1).return_ok(None);
        let client = mock.client();

        client.shutdown().await.unwrap();
        tokio::task::yield_now().await;
        assert!(matches!(client.get(1).await, Err(FrameworkError::Closed)));
        assert_eq!(mock.remaining(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_response() {
        let mock = MockClient::<Counter>::new();
        let client = mock.client();

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::NoReply)));
    }
}
