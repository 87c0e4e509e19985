use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::color::progress_color;
use crate::utils::text::{sanitize, Sanitize};

/// Task priority as the gateway spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "Alta")]
    Alta,
    #[serde(alias = "Media")]
    Media,
    #[serde(alias = "Baja")]
    Baja,
}

/// Who the task belongs to: the caller alone, a group of members, or
/// assignees chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[serde(alias = "Individual")]
    Individual,
    #[serde(alias = "Grupal")]
    Grupal,
    #[serde(alias = "Asignar")]
    Asignar,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
        }
    }
}

impl Sanitize for Subtask {
    fn sanitized(self) -> Self {
        Self {
            title: sanitize(&self.title),
            ..self
        }
    }
}

/// A task as returned by the list and detail endpoints.
///
/// List endpoints return a subset of the fields; everything except the
/// title falls back to its default when absent or null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default, rename = "type")]
    pub kind: Option<TaskType>,
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub due_time: Option<String>,
    #[serde(default)]
    pub start_reminder_date: Option<String>,
    #[serde(default)]
    pub start_reminder_time: Option<String>,
    #[serde(default)]
    pub end_reminder_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtasks: Vec<Subtask>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_ids: Vec<String>,
}

impl Task {
    pub fn progress_color(&self) -> &'static str {
        progress_color(self.progress)
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}

impl Sanitize for Task {
    fn sanitized(self) -> Self {
        Self {
            title: sanitize(&self.title),
            description: sanitize(&self.description),
            subtasks: self.subtasks.into_iter().map(Sanitize::sanitized).collect(),
            ..self
        }
    }
}

/// Outgoing payload for creating or editing a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskType>,
    pub start_reminder_date: String,
    pub start_reminder_time: String,
    pub end_reminder_time: String,
    pub due_date: String,
    pub due_time: String,
    pub subtasks: Vec<Subtask>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
}

impl Sanitize for TaskDraft {
    fn sanitized(self) -> Self {
        Self {
            title: sanitize(&self.title),
            description: sanitize(&self.description),
            subtasks: self.subtasks.into_iter().map(Sanitize::sanitized).collect(),
            ..self
        }
    }
}

impl From<&Task> for TaskDraft {
    /// Seed an edit form from a fetched task.
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            priority: task.priority,
            kind: task.kind,
            start_reminder_date: task.start_reminder_date.clone().unwrap_or_default(),
            start_reminder_time: task.start_reminder_time.clone().unwrap_or_default(),
            end_reminder_time: task.end_reminder_time.clone().unwrap_or_default(),
            due_date: task.due_date.clone().unwrap_or_default(),
            due_time: task.due_time.clone().unwrap_or_default(),
            subtasks: task.subtasks.clone(),
            user_ids: task.user_ids.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON number (the gateway sometimes sends fractional
/// percentages) and clamp it to 0..=100.
fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}
