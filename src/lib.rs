//! Taskgate - client core for a task-management REST gateway
//!
//! This library holds everything a front end needs to talk to the gateway:
//! a persisted session, an authenticated fetch client, typed records, input
//! validation, and one state provider per data slice. Rendering is left to
//! the caller; the bundled binary is a plain command line front end.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`session`] - Persisted token, username and user id
//! * [`api`] - Fetch client and its error taxonomy
//! * [`models`] - Records mirroring gateway payloads
//! * [`providers`] - Loading/error/data slices and their operations
//! * [`app`] - Screen-level state container
//! * [`utils`] - Text, color and date helpers

/// Fetch client for the REST gateway
pub mod api;

/// Application state and screen dependencies
pub mod app;

/// Login, registration and logout
pub mod auth;

/// Configuration module for managing application settings
pub mod config;

/// Endpoint paths, storage keys and user-facing messages
pub mod constants;

/// Logging setup for the binary
pub mod logger;

/// Gateway payload records
pub mod models;

/// Per-slice state providers
pub mod providers;

/// Session persistence
pub mod session;

/// Utility functions for text cleanup, colors and dates
pub mod utils;

/// Client-side form validation
pub mod validation;

pub use api::{ApiClient, FetchError};
pub use app::{AppState, Fetch, Screen};
pub use config::Config;
pub use session::Session;
