use serde::{Deserialize, Serialize};

/// Entry in the member/assignee pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: String,
    pub username: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
