//! The loading/error/data container every provider is built on.
//!
//! A slice moves `Idle -> Loading -> Success | Error` and back to `Loading`
//! on the next call. Calls are not serialized: each one takes a ticket, and
//! only the most recently issued ticket may write a result. A response that
//! arrives after a newer call has started is dropped, so a slow early fetch
//! can no longer overwrite a fresh one.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use crate::api::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

/// A point-in-time copy of a slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<T> {
    pub status: Status,
    pub data: T,
    pub error: Option<String>,
}

impl<T> SliceState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }
}

/// Identifies one call against a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

struct Inner<T> {
    state: SliceState<T>,
    latest: u64,
}

/// Shared, cloneable state for one provider. Clones observe the same slice.
pub struct Slice<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Slice<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SliceState {
                    status: Status::Idle,
                    data: T::default(),
                    error: None,
                },
                latest: 0,
            })),
        }
    }

    pub async fn snapshot(&self) -> SliceState<T> {
        self.inner.lock().await.state.clone()
    }

    pub async fn data(&self) -> T {
        self.inner.lock().await.state.data.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.lock().await.state.error.clone()
    }

    pub async fn status(&self) -> Status {
        self.inner.lock().await.state.status
    }

    pub async fn is_loading(&self) -> bool {
        self.status().await == Status::Loading
    }

    /// Replace the data directly, outside of any call.
    pub async fn set_data(&self, data: T) {
        self.inner.lock().await.state.data = data;
    }

    /// Edit the data in place, outside of any call.
    pub async fn edit_data<F>(&self, edit: F)
    where
        F: FnOnce(&mut T),
    {
        edit(&mut self.inner.lock().await.state.data);
    }

    /// Forget the last error and apply `edit` to the data. A failed slice
    /// goes back to `Idle`.
    pub async fn clear_error_with<F>(&self, edit: F)
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.lock().await;
        edit(&mut inner.state.data);
        inner.state.error = None;
        if inner.state.status == Status::Error {
            inner.state.status = Status::Idle;
        }
    }

    /// Start a call: enter `Loading`, clear the error, and supersede any
    /// call still in flight.
    pub async fn begin(&self) -> Ticket {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        inner.state.status = Status::Loading;
        inner.state.error = None;
        Ticket(inner.latest)
    }

    /// Store `data` if `ticket` is still current. Returns whether it was applied.
    pub async fn succeed(&self, ticket: Ticket, data: T) -> bool {
        self.succeed_with(ticket, |current| *current = data).await
    }

    /// Like [`succeed`](Self::succeed), but edits the data in place. The edit
    /// and the status change land under one lock.
    pub async fn succeed_with<F>(&self, ticket: Ticket, edit: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.lock().await;
        if !Self::is_current(&inner, ticket) {
            return false;
        }
        edit(&mut inner.state.data);
        inner.state.status = Status::Success;
        true
    }

    /// Finish a call successfully without touching the data.
    pub async fn settle(&self, ticket: Ticket) -> bool {
        let mut inner = self.inner.lock().await;
        if !Self::is_current(&inner, ticket) {
            return false;
        }
        inner.state.status = Status::Success;
        true
    }

    /// Record a failure. The data keeps whatever it held before the call.
    pub async fn fail(&self, ticket: Ticket, message: String) -> bool {
        self.fail_with(ticket, message, |_| {}).await
    }

    /// Record a failure and apply `edit` to the data in the same step.
    pub async fn fail_with<F>(&self, ticket: Ticket, message: String, edit: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.lock().await;
        if !Self::is_current(&inner, ticket) {
            return false;
        }
        edit(&mut inner.state.data);
        inner.state.error = Some(message);
        inner.state.status = Status::Error;
        true
    }

    /// Run `work` as one call and store its outcome. Errors become
    /// `fallback` unless the gateway supplied its own message.
    pub async fn track<F>(&self, fallback: &str, work: F)
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin().await;
        match work.await {
            Ok(data) => {
                self.succeed(ticket, data).await;
            }
            Err(err) => {
                self.fail(ticket, err.message_or(fallback)).await;
            }
        }
    }

    fn is_current(inner: &Inner<T>, ticket: Ticket) -> bool {
        if inner.latest == ticket.0 {
            true
        } else {
            debug!("Dropping stale response {} (latest {})", ticket.0, inner.latest);
            false
        }
    }
}

/// Result handed back from create/update/delete calls so a caller can branch
/// immediately without reading shared error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
}

impl MutationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn idle_loading_success() {
        let slice: Slice<Vec<u32>> = Slice::new();
        assert_eq!(slice.status().await, Status::Idle);

        let ticket = slice.begin().await;
        assert!(slice.is_loading().await);

        assert!(slice.succeed(ticket, vec![1, 2]).await);
        let state = slice.snapshot().await;
        assert_eq!(state.status, Status::Success);
        assert_eq!(state.data, vec![1, 2]);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn failure_keeps_previous_data() {
        let slice: Slice<Vec<u32>> = Slice::new();
        let ticket = slice.begin().await;
        slice.succeed(ticket, vec![7]).await;

        let ticket = slice.begin().await;
        slice.fail(ticket, "boom".to_string()).await;

        let state = slice.snapshot().await;
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.data, vec![7]);
    }

    #[tokio::test]
    async fn next_call_clears_error() {
        let slice: Slice<Option<u32>> = Slice::new();
        let ticket = slice.begin().await;
        slice.fail(ticket, "boom".to_string()).await;

        slice.begin().await;
        assert_eq!(slice.error().await, None);
        assert!(slice.is_loading().await);
    }

    #[tokio::test]
    async fn stale_response_is_dropped() {
        let slice: Slice<Option<&'static str>> = Slice::new();
        let first = slice.begin().await;
        let second = slice.begin().await;

        assert!(slice.succeed(second, Some("fresh")).await);
        assert!(!slice.succeed(first, Some("stale")).await);
        assert!(!slice.fail(first, "late".to_string()).await);

        let state = slice.snapshot().await;
        assert_eq!(state.data, Some("fresh"));
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn edits_apply_with_the_status_change() {
        let slice: Slice<(u32, bool)> = Slice::new();
        let first = slice.begin().await;
        let second = slice.begin().await;

        assert!(!slice.succeed_with(first, |data| data.1 = true).await);
        assert!(slice.fail_with(second, "reload failed".to_string(), |data| data.1 = true).await);

        let state = slice.snapshot().await;
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.data, (0, true));

        slice.clear_error_with(|data| data.1 = false).await;
        let state = slice.snapshot().await;
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.data, (0, false));
    }

    #[tokio::test]
    async fn track_uses_fallback_for_silent_failures() {
        let slice: Slice<Vec<u32>> = Slice::new();
        slice
            .track("Failed to fetch", async {
                Err(FetchError::Api {
                    status: 500,
                    message: None,
                })
            })
            .await;
        assert_eq!(slice.error().await.as_deref(), Some("Failed to fetch"));
    }
}
