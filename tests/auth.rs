mod common;

use serde_json::json;
use taskgate::api::FetchError;
use taskgate::auth::AuthService;
use taskgate::constants::ERROR_LOGIN;
use taskgate::providers::TasksProvider;
use taskgate::validation::{RegistrationForm, ValidationError};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_stores_session_and_authorizes_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users-api/login"))
        .and(body_json(json!({ "identifier": "ana", "password": "Secret1!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "username": "ana",
            "user_id": "u1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks-api/tasks/user"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([common::task_json("t1", "Laundry", 0)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::anonymous(&server);
    let auth = AuthService::new(client.clone());

    let response = auth.login("ana", "Secret1!").await.unwrap();
    assert_eq!(response.username, "ana");

    let session = client.session();
    assert_eq!(session.current_token().await.as_deref(), Some("fresh-token"));
    assert_eq!(session.username().await.as_deref(), Some("ana"));
    assert_eq!(session.user_id().await.as_deref(), Some("u1"));

    let tasks = TasksProvider::new(client);
    tasks.fetch_tasks().await;
    assert_eq!(tasks.tasks().await.len(), 1);
}

#[tokio::test]
async fn rejected_login_leaves_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users-api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })))
        .mount(&server)
        .await;

    let client = common::anonymous(&server);
    let auth = AuthService::new(client.clone());

    let err = auth.login("ana", "wrong").await.unwrap_err();
    assert_eq!(err.message_or(ERROR_LOGIN), "Invalid credentials");
    assert!(!client.session().is_authenticated().await);
}

#[tokio::test]
async fn empty_credentials_are_not_sent() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let auth = AuthService::new(common::anonymous(&server));
    let err = auth.login("", "Secret1!").await.unwrap_err();
    assert!(matches!(err, FetchError::Validation(ValidationError::MissingCredentials)));
}

#[tokio::test]
async fn register_validates_then_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users-api/register"))
        .and(body_json(json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": "Secret1!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthService::new(common::anonymous(&server));
    let mut form = RegistrationForm {
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "Secret1!".to_string(),
        confirm_password: "Secret2!".to_string(),
    };

    let err = auth.register(&form).await.unwrap_err();
    assert!(matches!(err, FetchError::Validation(ValidationError::PasswordMismatch)));

    form.confirm_password = form.password.clone();
    auth.register(&form).await.unwrap();
}

#[tokio::test]
async fn logout_clears_session_only_when_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users-api/logout"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users-api/logout"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "bye" })))
        .mount(&server)
        .await;

    let client = common::signed_in(&server).await;
    let auth = AuthService::new(client.clone());

    assert!(auth.logout().await.is_err());
    assert!(client.session().is_authenticated().await);

    auth.logout().await.unwrap();
    assert!(!client.session().is_authenticated().await);
    assert_eq!(client.session().user_id().await, None);
}
