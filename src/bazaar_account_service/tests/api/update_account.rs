use bazaar_core::{AccountId, AccountImage};
use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_apply_patch_and_return_updated_profile() {
    let app = TestApp::new().await;
    let session = app.signed_up_company().await;
    let id = session["company"]["id"].as_str().unwrap();

    let response = app
        .patch_company(id, &json!({ "name": "Acme Pipes", "website": "https://acme.io" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["name"], "Acme Pipes");
    assert_eq!(profile["website"], "https://acme.io");
    assert_eq!(profile["phone"], "555-0100");

    let fetched: Value = app.get_company(id).await.json().await.unwrap();
    assert_eq!(fetched, profile);
}

#[tokio::test]
async fn should_include_attached_images() {
    let app = TestApp::new().await;
    let session = app.signed_up_company().await;
    let id = session["company"]["id"].as_str().unwrap();
    let account_id: AccountId = id.parse().unwrap();
    app.images
        .attach(AccountImage::new(account_id, "https://cdn.acme.io/logo.png"))
        .await;

    let profile: Value = app.get_company(id).await.json().await.unwrap();

    assert_eq!(profile["images"][0]["url"], "https://cdn.acme.io/logo.png");
}

#[tokio::test]
async fn should_return_400_for_unknown_field() {
    let app = TestApp::new().await;
    let session = app.signed_up_company().await;
    let id = session["company"]["id"].as_str().unwrap();

    let response = app
        .patch_company(id, &json!({ "passwordHash": "whatever" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_404_for_unknown_company() {
    let app = TestApp::new().await;

    let id = AccountId::new().to_string();
    let patched = app.patch_company(&id, &json!({ "name": "Ghost" })).await;
    let fetched = app.get_company(&id).await;

    assert_eq!(patched.status().as_u16(), 404);
    assert_eq!(fetched.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_400_for_malformed_id() {
    let app = TestApp::new().await;

    let response = app.get_company("not-a-uuid").await;

    assert_eq!(response.status().as_u16(), 400);
}
