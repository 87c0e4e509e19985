#![allow(dead_code)]

use serde_json::{json, Value};
use taskgate::api::ApiClient;
use taskgate::session::Session;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const USER_ID: &str = "u1";

/// Client with a stored token and user id, pointed at `server`.
pub async fn signed_in(server: &MockServer) -> ApiClient {
    let session = Session::in_memory();
    session.login(TOKEN, "ana", Some(USER_ID)).await.unwrap();
    ApiClient::new(server.uri(), session)
}

/// Client with an empty session.
pub fn anonymous(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Session::in_memory())
}

pub fn task_json(id: &str, title: &str, progress: u8) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "Something to do",
        "category": "Home",
        "priority": "media",
        "type": "individual",
        "progress": progress,
        "due_date": "2026-10-20",
        "subtasks": [],
    })
}
