//! Application state container.
//!
//! One [`AppState`] owns the client, the session and every provider slice.
//! Screens declare what they need through [`Screen::dependencies`] instead of
//! being wrapped in nested providers; each slice keeps its own lifecycle.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};
use tokio::task::JoinSet;

use crate::api::ApiClient;
use crate::auth::AuthService;
use crate::config::Config;
use crate::models::ProgressStatus;
use crate::providers::{
    CategoriesProvider, CategoryTasksProvider, NotificationsProvider, ProgressTasksProvider, TaskDetailProvider,
    TaskEditorProvider, TaskSummaryProvider, TasksProvider, UsersProvider,
};
use crate::session::{FileStore, Session};

/// A read against one slice, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Tasks,
    TasksByCategory(String),
    TasksByProgress(ProgressStatus),
    Categories,
    TaskDetail(String),
    EditTask(String),
    Summary,
    Notifications,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    AllTasks,
    CompletedTasks,
    CategoryTasks(String),
    TaskDetail(String),
    EditTask(String),
    CreateTask,
    Notifications,
}

impl Screen {
    /// Slices that must be refreshed when this screen gains focus.
    pub fn dependencies(&self) -> Vec<Fetch> {
        match self {
            Screen::Home => vec![Fetch::Categories, Fetch::TasksByProgress(ProgressStatus::All), Fetch::Summary],
            Screen::AllTasks => vec![Fetch::Tasks],
            Screen::CompletedTasks => vec![Fetch::TasksByProgress(ProgressStatus::Completed)],
            Screen::CategoryTasks(category) => vec![Fetch::TasksByCategory(category.clone())],
            Screen::TaskDetail(task_id) => vec![Fetch::TaskDetail(task_id.clone())],
            Screen::EditTask(task_id) => vec![Fetch::EditTask(task_id.clone()), Fetch::Categories],
            Screen::CreateTask => vec![Fetch::Categories],
            Screen::Notifications => vec![Fetch::Notifications],
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub auth: AuthService,
    pub tasks: TasksProvider,
    pub category_tasks: CategoryTasksProvider,
    pub progress_tasks: ProgressTasksProvider,
    pub categories: CategoriesProvider,
    pub task_detail: TaskDetailProvider,
    pub task_editor: TaskEditorProvider,
    pub summary: TaskSummaryProvider,
    pub notifications: NotificationsProvider,
    pub users: UsersProvider,
}

impl AppState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            tasks: TasksProvider::new(client.clone()),
            category_tasks: CategoryTasksProvider::new(client.clone()),
            progress_tasks: ProgressTasksProvider::new(client.clone()),
            categories: CategoriesProvider::new(client.clone()),
            task_detail: TaskDetailProvider::new(client.clone()),
            task_editor: TaskEditorProvider::new(client.clone()),
            summary: TaskSummaryProvider::new(client.clone()),
            notifications: NotificationsProvider::new(client.clone()),
            users: UsersProvider::new(client.clone()),
            client,
        }
    }

    /// Build the client and a file-backed session from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = FileStore::new(config.session.resolved_path()?);
        let session = Session::new(Arc::new(store));
        Ok(Self::new(ApiClient::from_config(config, session)))
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub async fn run(&self, fetch: &Fetch) {
        debug!("Refreshing {:?}", fetch);
        match fetch {
            Fetch::Tasks => self.tasks.fetch_tasks().await,
            Fetch::TasksByCategory(category) => self.category_tasks.fetch_tasks_by_category(category).await,
            Fetch::TasksByProgress(status) => self.progress_tasks.fetch_tasks_by_progress(*status).await,
            Fetch::Categories => self.categories.fetch_categories().await,
            Fetch::TaskDetail(task_id) => self.task_detail.fetch_task_details(task_id).await,
            Fetch::EditTask(task_id) => self.task_editor.fetch_task_details(task_id).await,
            Fetch::Summary => self.summary.fetch_task_summary().await,
            Fetch::Notifications => self.notifications.fetch_notifications().await,
            Fetch::Users => self.users.fetch_users().await,
        }
    }

    /// Refresh every slice the screen depends on, concurrently.
    pub async fn refresh(&self, screen: &Screen) {
        let mut set = JoinSet::new();
        for fetch in screen.dependencies() {
            let state = self.clone();
            set.spawn(async move { state.run(&fetch).await });
        }

        while let Some(joined) = set.join_next().await {
            if let Err(e) = joined {
                warn!("Refresh task for {:?} failed: {}", screen, e);
            }
        }
    }
}
