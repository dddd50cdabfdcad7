use serde_json::{Value, json};

use crate::helpers::{TestApp, random_email, sign_up_body};

#[tokio::test]
async fn should_return_200_with_a_fresh_token() {
    let app = TestApp::new().await;
    let email = random_email();
    let sign_up: Value = app
        .post_sign_up(&sign_up_body(&email))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .post_sign_in(&json!({ "email": email, "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_ne!(body["accessToken"], sign_up["accessToken"]);
    assert_eq!(body["company"], sign_up["company"]);
}

#[tokio::test]
async fn should_return_422_for_wrong_password() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_sign_up(&sign_up_body(&email)).await;

    let response = app
        .post_sign_in(&json!({ "email": email, "password": "password124" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn should_return_422_for_short_wrong_password() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_sign_up(&sign_up_body(&email)).await;

    let response = app
        .post_sign_in(&json!({ "email": email, "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn should_return_404_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_sign_in(&json!({ "email": random_email(), "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_400_for_malformed_email() {
    let app = TestApp::new().await;

    let response = app
        .post_sign_in(&json!({ "email": "nobody", "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
