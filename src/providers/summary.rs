use super::state::{Slice, SliceState};
use crate::api::ApiClient;
use crate::constants::{ERROR_FETCH_SUMMARY, PATH_TASK_SUMMARY};
use crate::models::TaskSummary;

/// Aggregate counters and completion trend for the home screen.
#[derive(Clone)]
pub struct TaskSummaryProvider {
    client: ApiClient,
    slice: Slice<Option<TaskSummary>>,
}

impl TaskSummaryProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_task_summary(&self) {
        self.slice
            .track(ERROR_FETCH_SUMMARY, async {
                self.client.get_as::<TaskSummary>(PATH_TASK_SUMMARY).await.map(Some)
            })
            .await;
    }

    pub async fn state(&self) -> SliceState<Option<TaskSummary>> {
        self.slice.snapshot().await
    }

    pub async fn summary(&self) -> Option<TaskSummary> {
        self.slice.data().await
    }
}
