use serde::{Deserialize, Serialize};

/// Whether the predicted completion rate is improving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    #[serde(default)]
    pub total_tasks: u32,
}

/// Aggregate counters from `GET /tasks-api/categories/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
    #[serde(default)]
    pub predicted_completion_rate: f64,
    #[serde(default)]
    pub total_completada: u32,
    #[serde(default)]
    pub total_en_progreso: u32,
    #[serde(default)]
    pub total_sin_iniciar: u32,
    #[serde(default)]
    pub total_tasks: u32,
    pub trend: Trend,
}

impl TaskSummary {
    pub fn completed_percent(&self) -> f64 {
        percent(self.total_completada, self.total_tasks)
    }

    pub fn in_progress_percent(&self) -> f64 {
        percent(self.total_en_progreso, self.total_tasks)
    }

    pub fn not_started_percent(&self) -> f64 {
        percent(self.total_sin_iniciar, self.total_tasks)
    }
}

/// Share of `part` in `total` as 0-100. Zero when there is nothing to count.
pub fn percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(total) * 100.0
    }
}
