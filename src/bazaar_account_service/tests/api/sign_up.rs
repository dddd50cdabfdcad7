use serde_json::{Value, json};

use crate::helpers::{TestApp, random_email, sign_up_body};

#[tokio::test]
async fn should_return_201_with_token_and_company() {
    let app = TestApp::new().await;
    let email = random_email();

    let response = app.post_sign_up(&sign_up_body(&email)).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert!(body["accessToken"].is_string());
    let company = &body["company"];
    assert_eq!(company["email"], email.as_str());
    assert_eq!(company["name"], "Acme Plumbing");
    assert_eq!(company["phone"], "555-0100");
    assert_eq!(company["categoryTitle"], "Plumbing");
    assert_eq!(company["categoryId"], app.plumbing.id.to_string());
    assert_eq!(company["images"], json!([]));
}

#[tokio::test]
async fn should_never_expose_password_material() {
    let app = TestApp::new().await;

    let response = app.post_sign_up(&sign_up_body(&random_email())).await;

    let text = response.text().await.unwrap();
    assert!(!text.contains("password"));
    assert!(!text.contains("argon2"));
}

#[tokio::test]
async fn should_issue_an_elevated_token() {
    let app = TestApp::new().await;

    let body = app.signed_up_company().await;

    let token_id = body["accessToken"].as_str().unwrap().parse().unwrap();
    let token = app.tokens.get(&token_id).await.unwrap();
    assert!(token.elevated);
}

#[tokio::test]
async fn should_resolve_category_by_id() {
    let app = TestApp::new().await;
    let mut request = sign_up_body(&random_email());
    request["category"] = json!(app.plumbing.id.to_string());

    let response = app.post_sign_up(&request).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["company"]["categoryTitle"], "Plumbing");
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = random_email();
    app.post_sign_up(&sign_up_body(&email)).await;

    let response = app.post_sign_up(&sign_up_body(&email)).await;

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Company already exists");
}

#[tokio::test]
async fn should_return_400_for_unknown_category() {
    let app = TestApp::new().await;
    let mut request = sign_up_body(&random_email());
    request["category"] = json!("Gardening");

    let response = app.post_sign_up(&request).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let invalid_inputs = [
        json!({ "email": "not-an-email", "password": "password123", "category": "Plumbing", "name": "Acme" }),
        json!({ "email": random_email(), "password": "short", "category": "Plumbing", "name": "Acme" }),
        json!({ "email": random_email(), "password": "password123", "category": "Plumbing", "name": "  " }),
    ];

    for input in invalid_inputs {
        let response = app.post_sign_up(&input).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {input}");
    }
}

#[tokio::test]
async fn should_return_422_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .post_sign_up(&json!({ "email": random_email(), "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
