use serde::{Deserialize, Serialize};

use crate::constants::NOTIFICATION_NO_TASK;

/// A pending reminder from `GET /tasks-api/notifications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub user_id: String,
}

impl Notification {
    /// False for general notices the gateway files under a placeholder task id.
    pub fn links_task(&self) -> bool {
        !self.task_id.is_empty() && self.task_id != NOTIFICATION_NO_TASK
    }
}
