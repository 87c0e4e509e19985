use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::FetchError;
use crate::config::Config;
use crate::session::Session;
use crate::utils::text::decode_unicode_escapes;

/// Gateway client. Cheap to clone; clones share the connection pool and
/// the session.
///
/// Each call is attempted exactly once. There is no retry, no backoff and no
/// timeout beyond the transport's own.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn from_config(config: &Config, session: Session) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return the parsed JSON payload.
    ///
    /// With `requires_auth` and no stored token this fails with
    /// [`FetchError::Auth`] before anything is sent.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, FetchError> {
        self.execute(method, path, &[], body, requires_auth).await
    }

    /// Authorized GET decoded into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let value = self.execute(Method::GET, path, &[], None, true).await?;
        decode(value)
    }

    /// Authorized GET with URL-encoded query pairs, decoded into `T`.
    pub async fn get_query_as<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let value = self.execute(Method::GET, path, query, None, true).await?;
        decode(value)
    }

    /// Send `body` as JSON and decode the response into `T`.
    pub async fn send_as<B, T>(&self, method: Method, path: &str, body: &B, requires_auth: bool) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(FetchError::Encode)?;
        let value = self.execute(method, path, &[], Some(&body), requires_auth).await?;
        decode(value)
    }

    /// Send `body` as JSON when the response payload is not needed.
    pub async fn send<B>(&self, method: Method, path: &str, body: &B, requires_auth: bool) -> Result<Value, FetchError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(FetchError::Encode)?;
        self.execute(method, path, &[], Some(&body), requires_auth).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, FetchError> {
        let token = if requires_auth {
            match self.session.current_token().await {
                Some(token) => Some(token),
                None => {
                    warn!("{} {} not sent: no session token", method, path);
                    return Err(FetchError::Auth);
                }
            }
        } else {
            None
        };

        debug!("{} {}", method, path);

        let mut builder = self
            .http
            .request(method.clone(), format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            FetchError::Network(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(FetchError::Network)?;

        if status.is_success() {
            parse_body(&bytes)
        } else {
            let message = parse_body(&bytes).ok().as_ref().and_then(server_message);
            warn!("{} {} returned {}", method, path, status);
            Err(FetchError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Decode `\uXXXX` escapes in every string, then map onto `T`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(decode_unicode_escapes(value)).map_err(|e| FetchError::Parse(e.to_string()))
}

/// An empty body is `null`; anything else must be JSON.
fn parse_body(bytes: &[u8]) -> Result<Value, FetchError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Failure text from an error payload. Most endpoints use `message`; create
/// and edit use `error`.
fn server_message(payload: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| payload.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_body(b"").unwrap(), Value::Null);
        assert_eq!(parse_body(b" \n").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(parse_body(b"<html>"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn server_message_checks_message_then_error() {
        assert_eq!(server_message(&json!({ "message": "a", "error": "b" })).as_deref(), Some("a"));
        assert_eq!(server_message(&json!({ "error": "b" })).as_deref(), Some("b"));
        assert_eq!(server_message(&json!({ "detail": "c" })), None);
        assert_eq!(server_message(&json!([1, 2])), None);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/", Session::in_memory());
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
