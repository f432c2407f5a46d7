use reqwest::{Client, Response};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use auth_gate_service::app_router;
use auth_gate_service::app_state::AppState;
use auth_gate_service::domain::{User, UserStore};
use auth_gate_service::services::{AccessGate, HashmapUserStore, TokenCodec};
use auth_gate_service::utils::consts::TOKEN_HEADER;
use auth_gate_service::utils::Config;

#[derive(Serialize)]
pub struct LoginBody {
    pub name: String,
    pub password: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_ttl_seconds(180).await
    }

    // Negative TTLs mint already-expired tokens, which is how the expiry
    // branch is exercised without sleeping.
    pub async fn with_ttl_seconds(ttl_seconds: i64) -> Self {
        let secret = format!("test-secret-{}", Uuid::new_v4());
        let config = Arc::new(
            Config::new(secret, "test-issuer", ttl_seconds).expect("failed to build test config"),
        );
        let codec = TokenCodec::new(config.clone());
        let gate = Arc::new(AccessGate::new(codec.clone()));

        let mut user_store = HashmapUserStore::new();
        user_store
            .add_user(User::new("one".to_string(), 18, "123456".to_string()))
            .await
            .expect("failed to seed test user");

        let app_state = AppState::new(Arc::new(RwLock::new(user_store)), codec, gate, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn login(&self, name: String, password: String) -> Response {
        let body = LoginBody { name, password };

        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&body)
            .header("Content-Type", "application/json")
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn get_welcome(&self, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/welcome", &self.address));
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token);
        }

        request
            .send()
            .await
            .expect("Failed to execute welcome request.")
    }

    /// Log in with the seeded demo user and return the issued token.
    pub async fn issue_token(&self) -> String {
        let response = self.login("one".to_string(), "123456".to_string()).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: auth_gate_service::domain::LoginResponse =
            response.json().await.expect("login response not json");
        body.token
    }
}
