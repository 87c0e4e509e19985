//! Create and edit flows.
//!
//! Drafts are validated before anything is sent, and their free text is
//! sanitized on the way out.

use log::info;
use reqwest::Method;
use serde::Serialize;

use super::state::{MutationOutcome, Slice, SliceState};
use super::task_detail::load_task;
use crate::api::ApiClient;
use crate::constants::{
    task_edit_path, ERROR_CREATE_TASK, ERROR_FETCH_TASK_DETAILS, ERROR_NO_USER_ID, ERROR_UPDATE_TASK,
    PATH_TASK_CREATE, SUCCESS_TASK_CREATED, SUCCESS_TASK_UPDATED,
};
use crate::models::{Task, TaskDraft};
use crate::utils::text::Sanitize;
use crate::validation::validate_task_draft;

#[derive(Serialize)]
struct CreateTaskPayload<'a> {
    #[serde(flatten)]
    draft: &'a TaskDraft,
    user_id: &'a str,
}

/// What the edit screen reads: the task under edit and whether the last
/// update went through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorData {
    pub task: Option<Task>,
    pub saved: bool,
}

#[derive(Clone)]
pub struct TaskEditorProvider {
    client: ApiClient,
    slice: Slice<EditorData>,
}

impl TaskEditorProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    /// Load the task being edited. The saved flag is left alone.
    pub async fn fetch_task_details(&self, task_id: &str) {
        let ticket = self.slice.begin().await;
        match load_task(&self.client, task_id).await {
            Ok(task) => {
                self.slice.succeed_with(ticket, |data| data.task = task).await;
            }
            Err(err) => {
                self.slice.fail(ticket, err.message_or(ERROR_FETCH_TASK_DETAILS)).await;
            }
        }
    }

    /// Create a task owned by the signed-in user.
    pub async fn create_task(&self, draft: &TaskDraft) -> MutationOutcome {
        if let Err(err) = validate_task_draft(draft) {
            return MutationOutcome::failed(err.to_string());
        }

        let ticket = self.slice.begin().await;
        let session = self.client.session();
        let user_id = match (session.current_token().await, session.user_id().await) {
            (Some(_), Some(user_id)) => user_id,
            _ => {
                self.slice.fail(ticket, ERROR_NO_USER_ID.to_string()).await;
                return MutationOutcome::failed(ERROR_NO_USER_ID);
            }
        };

        let draft = draft.clone().sanitized();
        let payload = CreateTaskPayload {
            draft: &draft,
            user_id: &user_id,
        };

        match self.client.send(Method::POST, PATH_TASK_CREATE, &payload, true).await {
            Ok(_) => {
                info!("Created task {}", draft.title);
                self.slice.settle(ticket).await;
                MutationOutcome::ok(SUCCESS_TASK_CREATED)
            }
            Err(err) => {
                let message = err.message_or(ERROR_CREATE_TASK);
                self.slice.fail(ticket, message.clone()).await;
                MutationOutcome::failed(message)
            }
        }
    }

    /// Submit an edited draft, then reload the task and raise the saved flag.
    ///
    /// The update and the reload share one call, so the slice stays
    /// `Loading` until the reloaded task and the flag are stored together.
    /// The flag is raised even when only the reload fails.
    pub async fn update_task(&self, task_id: &str, draft: &TaskDraft) -> MutationOutcome {
        if let Err(err) = validate_task_draft(draft) {
            return MutationOutcome::failed(err.to_string());
        }

        self.slice.edit_data(|data| data.saved = false).await;
        let ticket = self.slice.begin().await;
        let draft = draft.clone().sanitized();

        if let Err(err) = self.client.send(Method::PUT, &task_edit_path(task_id), &draft, true).await {
            let message = err.message_or(ERROR_UPDATE_TASK);
            self.slice.fail(ticket, message.clone()).await;
            return MutationOutcome::failed(message);
        }

        info!("Updated task {}", task_id);
        match load_task(&self.client, task_id).await {
            Ok(task) => {
                self.slice
                    .succeed_with(ticket, |data| {
                        data.task = task;
                        data.saved = true;
                    })
                    .await;
            }
            Err(err) => {
                self.slice
                    .fail_with(ticket, err.message_or(ERROR_FETCH_TASK_DETAILS), |data| data.saved = true)
                    .await;
            }
        }
        MutationOutcome::ok(SUCCESS_TASK_UPDATED)
    }

    /// Reset the error and saved flag, e.g. after a modal is dismissed.
    pub async fn clear_status(&self) {
        self.slice.clear_error_with(|data| data.saved = false).await;
    }

    pub async fn succeeded(&self) -> bool {
        self.slice.snapshot().await.data.saved
    }

    pub async fn set_task(&self, task: Option<Task>) {
        self.slice.edit_data(|data| data.task = task).await;
    }

    pub async fn state(&self) -> SliceState<EditorData> {
        self.slice.snapshot().await
    }

    pub async fn task(&self) -> Option<Task> {
        self.slice.data().await.task
    }
}
