//! One task in full, with subtask toggling and deletion.

use log::info;
use reqwest::Method;
use serde::Serialize;

use super::state::{MutationOutcome, Slice, SliceState};
use crate::api::{ApiClient, FetchError};
use crate::constants::{
    task_delete_path, task_path, task_subtasks_path, ERROR_DELETE_TASK, ERROR_FETCH_TASK_DETAILS, ERROR_NO_SUBTASK,
    ERROR_NO_TASK_LOADED, ERROR_UPDATE_SUBTASKS, SUCCESS_SUBTASKS_UPDATED, SUCCESS_TASK_DELETED,
};
use crate::models::{Subtask, Task};
use crate::utils::text::Sanitize;

#[derive(Serialize)]
struct SubtasksPatch<'a> {
    subtasks: &'a [Subtask],
}

/// Fetch one task, decode escapes and sanitize its text.
pub(crate) async fn load_task(client: &ApiClient, task_id: &str) -> Result<Option<Task>, FetchError> {
    let task: Task = client.get_as(&task_path(task_id)).await?;
    Ok(Some(task.sanitized()))
}

#[derive(Clone)]
pub struct TaskDetailProvider {
    client: ApiClient,
    slice: Slice<Option<Task>>,
}

impl TaskDetailProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_task_details(&self, task_id: &str) {
        self.slice
            .track(ERROR_FETCH_TASK_DETAILS, load_task(&self.client, task_id))
            .await;
    }

    /// Replace the subtask list, then re-fetch so progress reflects the
    /// server's recalculation.
    pub async fn update_subtasks(&self, task_id: &str, subtasks: &[Subtask]) -> MutationOutcome {
        let ticket = self.slice.begin().await;
        let patched = self
            .client
            .send(Method::PATCH, &task_subtasks_path(task_id), &SubtasksPatch { subtasks }, true)
            .await;

        match patched {
            Ok(_) => {
                self.slice.settle(ticket).await;
                self.fetch_task_details(task_id).await;
                MutationOutcome::ok(SUCCESS_SUBTASKS_UPDATED)
            }
            Err(err) => {
                let message = err.message_or(ERROR_UPDATE_SUBTASKS);
                self.slice.fail(ticket, message.clone()).await;
                MutationOutcome::failed(message)
            }
        }
    }

    /// Flip one subtask of the loaded task and submit the whole list.
    ///
    /// Fails without sending anything unless `task_id` is the task currently
    /// held by the slice.
    pub async fn toggle_subtask(&self, task_id: &str, index: usize) -> MutationOutcome {
        let Some(task) = self.slice.data().await.filter(|task| task.id == task_id) else {
            return MutationOutcome::failed(ERROR_NO_TASK_LOADED);
        };

        let mut subtasks = task.subtasks;
        match subtasks.get_mut(index) {
            Some(subtask) => subtask.completed = !subtask.completed,
            None => return MutationOutcome::failed(ERROR_NO_SUBTASK),
        }

        self.update_subtasks(task_id, &subtasks).await
    }

    /// Delete the task and clear the slice.
    pub async fn delete_task(&self, task_id: &str) -> MutationOutcome {
        let ticket = self.slice.begin().await;
        match self.client.request(Method::DELETE, &task_delete_path(task_id), None, true).await {
            Ok(_) => {
                info!("Deleted task {}", task_id);
                self.slice.succeed(ticket, None).await;
                MutationOutcome::ok(SUCCESS_TASK_DELETED)
            }
            Err(err) => {
                let message = err.message_or(ERROR_DELETE_TASK);
                self.slice.fail(ticket, message.clone()).await;
                MutationOutcome::failed(message)
            }
        }
    }

    pub async fn set_task(&self, task: Option<Task>) {
        self.slice.set_data(task).await;
    }

    pub async fn state(&self) -> SliceState<Option<Task>> {
        self.slice.snapshot().await
    }

    pub async fn task(&self) -> Option<Task> {
        self.slice.data().await
    }
}
