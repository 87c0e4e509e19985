//! Task list slices: the caller's tasks, tasks in one category, and tasks
//! filtered by progress status.
//!
//! The three lists are independent slices so a category screen and the home
//! screen never overwrite each other's data.

use log::info;

use super::state::{Slice, SliceState};
use crate::api::{ApiClient, FetchError};
use crate::constants::{ERROR_FETCH_TASKS, PATH_TASKS_BY_CATEGORY, PATH_TASKS_BY_PROGRESS, PATH_TASKS_USER};
use crate::models::{ProgressStatus, Task};
use crate::utils::text::Sanitize;

async fn fetch_list(client: &ApiClient, path: &str, query: &[(&str, &str)]) -> Result<Vec<Task>, FetchError> {
    let tasks: Vec<Task> = client.get_query_as(path, query).await?;
    info!("Fetched {} tasks from {}", tasks.len(), path);
    Ok(tasks.into_iter().map(Sanitize::sanitized).collect())
}

/// `GET /tasks-api/tasks/user`
#[derive(Clone)]
pub struct TasksProvider {
    client: ApiClient,
    slice: Slice<Vec<Task>>,
}

impl TasksProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_tasks(&self) {
        self.slice
            .track(ERROR_FETCH_TASKS, fetch_list(&self.client, PATH_TASKS_USER, &[]))
            .await;
    }

    pub async fn state(&self) -> SliceState<Vec<Task>> {
        self.slice.snapshot().await
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.slice.data().await
    }
}

/// `GET /tasks-api/tasks/category?category=`
#[derive(Clone)]
pub struct CategoryTasksProvider {
    client: ApiClient,
    slice: Slice<Vec<Task>>,
}

impl CategoryTasksProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_tasks_by_category(&self, category: &str) {
        self.slice
            .track(
                ERROR_FETCH_TASKS,
                fetch_list(&self.client, PATH_TASKS_BY_CATEGORY, &[("category", category)]),
            )
            .await;
    }

    pub async fn state(&self) -> SliceState<Vec<Task>> {
        self.slice.snapshot().await
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.slice.data().await
    }
}

/// `GET /tasks-api/tasks/progress?progress_status=`
#[derive(Clone)]
pub struct ProgressTasksProvider {
    client: ApiClient,
    slice: Slice<Vec<Task>>,
}

impl ProgressTasksProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_tasks_by_progress(&self, status: ProgressStatus) {
        self.slice
            .track(
                ERROR_FETCH_TASKS,
                fetch_list(
                    &self.client,
                    PATH_TASKS_BY_PROGRESS,
                    &[("progress_status", status.as_query())],
                ),
            )
            .await;
    }

    pub async fn state(&self) -> SliceState<Vec<Task>> {
        self.slice.snapshot().await
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.slice.data().await
    }
}
