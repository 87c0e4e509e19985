use reqwest::Method;
use serde_json::Value;

use super::state::{MutationOutcome, Slice, SliceState};
use crate::api::{ApiClient, FetchError};
use crate::constants::{task_path, ERROR_FETCH_NOTIFICATIONS, ERROR_TASK_NOT_FOUND, PATH_NOTIFICATIONS, SUCCESS_TASK_EXISTS};
use crate::models::Notification;

/// Pending reminders. Nothing is cached between fetches.
#[derive(Clone)]
pub struct NotificationsProvider {
    client: ApiClient,
    slice: Slice<Vec<Notification>>,
}

impl NotificationsProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_notifications(&self) {
        self.slice
            .track(
                ERROR_FETCH_NOTIFICATIONS,
                self.client.get_as::<Vec<Notification>>(PATH_NOTIFICATIONS),
            )
            .await;
    }

    /// Whether the task a notification points at still exists. Used before
    /// navigating to it; does not touch the notification list.
    pub async fn task_exists(&self, task_id: &str) -> MutationOutcome {
        match self.client.request(Method::GET, &task_path(task_id), None, true).await {
            Ok(Value::Object(map)) if !map.is_empty() => MutationOutcome::ok(SUCCESS_TASK_EXISTS),
            Ok(_) | Err(FetchError::Api { .. }) => MutationOutcome::failed(ERROR_TASK_NOT_FOUND),
            Err(err) => MutationOutcome::failed(err.to_string()),
        }
    }

    pub async fn state(&self) -> SliceState<Vec<Notification>> {
        self.slice.snapshot().await
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.slice.data().await
    }
}
