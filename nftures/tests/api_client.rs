//! # API Client Integration Tests
//!
//! Runs the reqwest-backed client against a local axum stand-in for the auth
//! endpoint and checks wire bodies, status handling and error mapping.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use nftures::core::service::ApiService;
use nftures::services::api::ApiClient;
use nftures::{AppConfig, AppError};

/// Request bodies seen by the stand-in endpoint
#[derive(Clone, Default)]
struct Recorded(Arc<Mutex<Vec<Value>>>);

impl Recorded {
    fn last(&self) -> Value {
        self.0.lock().unwrap().last().cloned().unwrap()
    }
}

fn user_json(id: i64, email: &str) -> Value {
    json!({ "id": id, "email": email, "nickname": "neo", "balance": 0 })
}

async fn auth_endpoint(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorded.0.lock().unwrap().push(body.clone());

    let email = body["email"].as_str().unwrap_or_default();
    let (status, reply) = match body["action"].as_str() {
        Some("register") if email == "taken@example.com" => {
            (StatusCode::BAD_REQUEST, json!({ "error": "Email already exists" }))
        }
        Some("register") => (
            StatusCode::OK,
            json!({
                "success": true,
                "user_id": 5,
                "verification_code": "123456",
                "message": "Verification code sent"
            }),
        ),
        Some("verify") => (StatusCode::OK, json!({ "success": true, "message": "Email verified" })),
        Some("verify_with_password") => (
            StatusCode::OK,
            json!({ "success": true, "user": user_json(5, "new@example.com") }),
        ),
        Some("login") if email == "pending@example.com" => (
            StatusCode::FORBIDDEN,
            json!({ "error": "Email not verified", "user_id": 9 }),
        ),
        Some("login") if email == "neo@example.com" => (
            StatusCode::OK,
            json!({ "success": true, "user": user_json(7, email) }),
        ),
        Some("login") => (StatusCode::UNAUTHORIZED, json!({ "error": "Invalid credentials" })),
        Some("forgot_password") => (
            StatusCode::OK,
            json!({ "success": true, "user_id": 11, "reset_code": "777777" }),
        ),
        Some("reset_password") => (StatusCode::OK, json!({ "success": true })),
        Some("update_nickname") => (
            StatusCode::OK,
            json!({ "success": true, "nickname": body["nickname"] }),
        ),
        _ => (StatusCode::BAD_REQUEST, json!({ "error": "Unknown action" })),
    };
    (status, Json(reply))
}

async fn broken_endpoint() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn client_with_recording() -> (ApiClient, Recorded) {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/", post(auth_endpoint))
        .with_state(recorded.clone());
    let api_url = spawn_server(router).await;

    let config = AppConfig {
        api_url,
        http_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };
    (ApiClient::new(&config), recorded)
}

#[tokio::test]
async fn test_register_sends_null_nickname_and_returns_code() {
    // Arrange
    let (client, recorded) = client_with_recording().await;

    // Act
    let response = client
        .register("new@example.com".to_string(), "Passw0rdX".to_string(), None)
        .await
        .unwrap();

    // Assert
    assert_eq!(response.user_id, 5);
    assert_eq!(response.verification_code, "123456");
    assert_eq!(
        recorded.last(),
        json!({
            "action": "register",
            "email": "new@example.com",
            "password": "Passw0rdX",
            "nickname": null
        })
    );
}

#[tokio::test]
async fn test_register_error_body_is_verbatim() {
    let (client, _) = client_with_recording().await;

    let err = client
        .register(
            "taken@example.com".to_string(),
            "Passw0rdX".to_string(),
            Some("neo".to_string()),
        )
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Api("Email already exists".to_string()));
}

#[tokio::test]
async fn test_login_success_returns_user() {
    let (client, recorded) = client_with_recording().await;

    let user = client
        .login("neo@example.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.nickname.as_deref(), Some("neo"));
    assert_eq!(
        recorded.last(),
        json!({ "action": "login", "email": "neo@example.com", "password": "secret" })
    );
}

#[tokio::test]
async fn test_login_403_means_unverified() {
    let (client, _) = client_with_recording().await;

    let err = client
        .login("pending@example.com".to_string(), "secret".to_string())
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Unverified { user_id: 9 });
}

#[tokio::test]
async fn test_login_other_failure_is_api_error() {
    let (client, _) = client_with_recording().await;

    let err = client
        .login("who@example.com".to_string(), "wrong".to_string())
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Api("Invalid credentials".to_string()));
}

#[tokio::test]
async fn test_verification_and_reset_wire_shapes() {
    let (client, recorded) = client_with_recording().await;

    client.verify(5, "123456".to_string()).await.unwrap();
    assert_eq!(
        recorded.last(),
        json!({ "action": "verify", "user_id": 5, "code": "123456" })
    );

    let user = client
        .verify_with_password(5, "Passw0rdX".to_string())
        .await
        .unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(
        recorded.last(),
        json!({ "action": "verify_with_password", "user_id": 5, "password": "Passw0rdX" })
    );

    let forgot = client
        .forgot_password("neo@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(forgot.user_id, 11);
    assert_eq!(forgot.reset_code, "777777");

    client
        .reset_password(11, "777777".to_string(), "NewPassw0rd".to_string())
        .await
        .unwrap();
    assert_eq!(
        recorded.last(),
        json!({
            "action": "reset_password",
            "user_id": 11,
            "code": "777777",
            "new_password": "NewPassw0rd"
        })
    );
}

#[tokio::test]
async fn test_update_nickname_returns_server_value() {
    let (client, recorded) = client_with_recording().await;

    let nickname = client
        .update_nickname(7, "trinity".to_string())
        .await
        .unwrap();

    assert_eq!(nickname, "trinity");
    assert_eq!(
        recorded.last(),
        json!({ "action": "update_nickname", "user_id": 7, "nickname": "trinity" })
    );
}

#[tokio::test]
async fn test_non_json_failure_is_network_error() {
    let api_url = spawn_server(Router::new().route("/", post(broken_endpoint))).await;
    let client = ApiClient::new(&AppConfig {
        api_url,
        ..AppConfig::default()
    });

    let err = client.verify(1, "000000".to_string()).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind and drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&AppConfig {
        api_url: format!("http://{}/", addr),
        http_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    });

    let err = client
        .forgot_password("neo@example.com".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}
