//! Login, registration and logout.
//!
//! These calls are not slices: a login screen needs the typed error, not a
//! stored message, so results come back as `Result`.

use log::info;
use reqwest::Method;

use crate::api::{ApiClient, FetchError};
use crate::constants::{PATH_LOGIN, PATH_LOGOUT, PATH_REGISTER};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::validation::{validate_credentials, RegistrationForm};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and persist the session.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, FetchError> {
        validate_credentials(identifier, password)?;

        let response: LoginResponse = self
            .client
            .send_as(Method::POST, PATH_LOGIN, &LoginRequest { identifier, password }, false)
            .await?;

        self.client
            .session()
            .login(&response.access_token, &response.username, response.user_id.as_deref())
            .await?;

        info!("Logged in as {}", response.username);
        Ok(response)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), FetchError> {
        form.validate()?;

        let request = RegisterRequest {
            username: &form.username,
            email: &form.email,
            password: &form.password,
        };
        self.client.send(Method::POST, PATH_REGISTER, &request, false).await?;

        info!("Registered {}", form.username);
        Ok(())
    }

    /// Invalidate the token server-side. The local session is only cleared
    /// once the gateway accepts the logout.
    pub async fn logout(&self) -> Result<(), FetchError> {
        self.client.request(Method::POST, PATH_LOGOUT, None, true).await?;
        self.client.session().logout().await?;
        info!("Logged out");
        Ok(())
    }
}
