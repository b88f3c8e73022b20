//! Integration tests for the login/logout flow.

use http::StatusCode;
use http::header;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_redirects_editor_to_global_admin() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;

    let response = app
        .request(
            "POST",
            "/api/login/admin",
            Some(serde_json::json!({
                "username": "chief",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirectTo"], "/admin.html");

    let set_cookie = response
        .headers
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_redirects_region_role_to_its_admin() {
    let app = TestApp::new().await;
    app.create_account("eu-desk", "password123", "europe").await;

    let response = app
        .request(
            "POST",
            "/api/login/admin",
            Some(serde_json::json!({
                "username": "eu-desk",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirectTo"], "/europe/admin.html");
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;
    app.create_account("chief", "password123", "editor").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login/admin",
            Some(serde_json::json!({
                "username": "chief",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], "Invalid credentials");

    let unknown_user = app
        .request(
            "POST",
            "/api/login/admin",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.body["message"], wrong_password.body["message"]);
}

#[tokio::test]
async fn test_logout_redirects_by_role_and_invalidates() {
    let app = TestApp::new().await;
    app.create_account("asia-desk", "password123", "asia").await;
    let cookie = app.login("asia-desk", "password123").await;

    let response = app.request("POST", "/api/logout", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirectTo"], "/asia/");

    // The session is gone: a write with the old cookie is anonymous.
    let response = app
        .request(
            "POST",
            "/api/asia/news",
            Some(serde_json::json!({"heading": "x"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirectTo"], "/");
}
