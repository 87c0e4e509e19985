//! Constants used throughout the client
//!
//! This module centralizes endpoint paths, storage keys, user-facing messages
//! and validation bounds so the providers and the binary stay consistent.

// Gateway
pub const DEFAULT_BASE_URL: &str = "https://api-gateway.zapto.org:5000";

// Endpoints
pub const PATH_LOGIN: &str = "/users-api/login";
pub const PATH_REGISTER: &str = "/users-api/register";
pub const PATH_LOGOUT: &str = "/users-api/logout";
pub const PATH_USERNAMES: &str = "/users-api/usernames";
pub const PATH_TASKS_USER: &str = "/tasks-api/tasks/user";
pub const PATH_TASKS_BY_CATEGORY: &str = "/tasks-api/tasks/category";
pub const PATH_TASKS_BY_PROGRESS: &str = "/tasks-api/tasks/progress";
pub const PATH_TASK_CREATE: &str = "/tasks-api/create";
pub const PATH_TASK_SUMMARY: &str = "/tasks-api/categories/summary";
pub const PATH_NOTIFICATIONS: &str = "/tasks-api/notifications";
pub const PATH_CATEGORIES: &str = "/categories-api/categories";
pub const PATH_CATEGORY_CREATE: &str = "/categories-api/create";

/// `GET /tasks-api/task/{id}`
pub fn task_path(task_id: &str) -> String {
    format!("/tasks-api/task/{}", task_id)
}

/// `PUT /tasks-api/edit/{id}`
pub fn task_edit_path(task_id: &str) -> String {
    format!("/tasks-api/edit/{}", task_id)
}

/// `PATCH /tasks-api/task/{id}/subtasks`
pub fn task_subtasks_path(task_id: &str) -> String {
    format!("/tasks-api/task/{}/subtasks", task_id)
}

/// `DELETE /tasks-api/task/delete/{id}`
pub fn task_delete_path(task_id: &str) -> String {
    format!("/tasks-api/task/delete/{}", task_id)
}

// Session storage keys
pub const KEY_TOKEN: &str = "jwtToken";
pub const KEY_USERNAME: &str = "username";
pub const KEY_USER_ID: &str = "userId";

// Fallback messages when the server does not provide one
pub const ERROR_FETCH_TASKS: &str = "Failed to fetch tasks";
pub const ERROR_FETCH_TASK_DETAILS: &str = "Failed to fetch task details";
pub const ERROR_FETCH_SUMMARY: &str = "Failed to fetch task summary";
pub const ERROR_FETCH_CATEGORIES: &str = "Failed to fetch categories";
pub const ERROR_FETCH_NOTIFICATIONS: &str = "Failed to fetch notifications";
pub const ERROR_FETCH_USERS: &str = "Failed to fetch users";
pub const ERROR_UPDATE_SUBTASKS: &str = "Failed to update subtasks";
pub const ERROR_DELETE_TASK: &str = "Failed to delete task";
pub const ERROR_CREATE_TASK: &str = "Failed to create task";
pub const ERROR_UPDATE_TASK: &str = "Failed to update task";
pub const ERROR_CREATE_CATEGORY: &str = "Failed to create category";
pub const ERROR_LOGIN: &str = "Invalid identifier or password";
pub const ERROR_REGISTER: &str = "Something went wrong, please try again";
pub const ERROR_LOGOUT: &str = "Failed to log out";
pub const ERROR_TASK_NOT_FOUND: &str = "The task does not exist";
pub const ERROR_NO_TOKEN: &str = "Authentication token not found";
pub const ERROR_NO_USER_ID: &str = "Authentication token or user ID not found";
pub const ERROR_NO_SUBTASK: &str = "Subtask index out of range";
pub const ERROR_NO_TASK_LOADED: &str = "No task loaded";

// Success messages
pub const SUCCESS_TASK_CREATED: &str = "Task created successfully";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated successfully";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted successfully";
pub const SUCCESS_SUBTASKS_UPDATED: &str = "Subtasks updated successfully";
pub const SUCCESS_CATEGORY_CREATED: &str = "Category created successfully";
pub const SUCCESS_TASK_EXISTS: &str = "Task found";

// Validation bounds (inclusive, in characters)
pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 50;
pub const DESCRIPTION_MIN: usize = 3;
pub const DESCRIPTION_MAX: usize = 500;
pub const SUBTASK_MIN: usize = 3;
pub const SUBTASK_MAX: usize = 150;
pub const CATEGORY_MIN: usize = 3;
pub const CATEGORY_MAX: usize = 25;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;

/// Task id the server uses for notifications that are not tied to a task
pub const NOTIFICATION_NO_TASK: &str = "0000000";

/// Display colors randomly assigned to categories on fetch
pub const CATEGORY_PALETTE: [&str; 4] = ["#FF6F61", "#8E44AD", "#A3CB38", "#FF9FF3"];

// Messages printed by the binary
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
