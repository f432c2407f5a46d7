use crate::helpers::TestApp;
use auth_gate_service::domain::LoginResponse;

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let app = TestApp::new().await;

    let response = app.login("one".to_string(), "123456".to_string()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: LoginResponse = response.json().await.expect("login response not json");
    assert_eq!(body.code, 200);
    assert_eq!(
        body.token.split('.').count(),
        3,
        "expected a three-segment signed token"
    );
    // Issue dates use slash separators.
    assert!(body.date.contains('/'), "unexpected date format: {}", body.date);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.login("one".to_string(), "wrongpass".to_string()).await;
    assert_eq!(response.status().as_u16(), 401);

    let body = response.text().await.expect("failed reading body");
    assert_eq!(body, "Invalid name or password.");
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .login("nobody".to_string(), "123456".to_string())
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let body = response.text().await.expect("failed reading body");
    assert_eq!(body, "Invalid name or password.");
}

#[tokio::test]
async fn login_with_malformed_body_is_client_error() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .header("Content-Type", "application/json")
        .body(r#"{"name":"one"}"#)
        .send()
        .await
        .expect("Failed to execute login request.");

    assert!(
        response.status().is_client_error(),
        "expected 4xx, got {}",
        response.status()
    );
}
