//! Records mirroring the gateway's JSON payloads.
//!
//! Deserialization is the validation boundary: a payload missing a required
//! field fails to parse instead of leaking empty values into provider state.

pub mod category;
pub mod notification;
pub mod summary;
pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};

pub use category::{Category, NewCategory};
pub use notification::Notification;
pub use summary::{CategoryCount, TaskSummary, Trend};
pub use task::{Priority, Subtask, Task, TaskDraft, TaskType};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, UserSummary, UsersResponse};

/// Filter for `GET /tasks-api/tasks/progress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "en_progreso")]
    InProgress,
    #[serde(rename = "sin_iniciar")]
    NotStarted,
    #[serde(rename = "all")]
    All,
}

impl ProgressStatus {
    pub fn as_query(&self) -> &'static str {
        match self {
            ProgressStatus::Completed => "completada",
            ProgressStatus::InProgress => "en_progreso",
            ProgressStatus::NotStarted => "sin_iniciar",
            ProgressStatus::All => "all",
        }
    }
}

impl std::str::FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completada" | "completed" => Ok(ProgressStatus::Completed),
            "en_progreso" | "in_progress" => Ok(ProgressStatus::InProgress),
            "sin_iniciar" | "not_started" => Ok(ProgressStatus::NotStarted),
            "all" => Ok(ProgressStatus::All),
            other => Err(format!("unknown progress status '{}'", other)),
        }
    }
}
