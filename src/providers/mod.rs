//! Data slices consumed by the screens.
//!
//! Every provider wraps an [`ApiClient`](crate::api::ApiClient) and a
//! [`Slice`]. Reads (`fetch_*`) return nothing and publish into the slice;
//! writes return a [`MutationOutcome`] so the caller can react right away.
//! Errors never escape a provider: they become the slice's error message.

pub mod categories;
pub mod notifications;
pub mod state;
pub mod summary;
pub mod task_detail;
pub mod task_editor;
pub mod tasks;
pub mod users;

pub use categories::CategoriesProvider;
pub use notifications::NotificationsProvider;
pub use state::{MutationOutcome, Slice, SliceState, Status};
pub use summary::TaskSummaryProvider;
pub use task_detail::TaskDetailProvider;
pub use task_editor::{EditorData, TaskEditorProvider};
pub use tasks::{CategoryTasksProvider, ProgressTasksProvider, TasksProvider};
pub use users::UsersProvider;
