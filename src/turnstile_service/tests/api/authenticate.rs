use serde_json::{Value, json};

use crate::helpers::{TestApp, UnavailableUserStore, get_random_email};

#[tokio::test]
async fn should_return_200_with_token_for_valid_credentials() {
    let app = TestApp::new().await;
    let customer = app.register("right").await;

    let response = app
        .post_authenticate(&json!({ "email": customer["email"], "password": "right" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], customer["email"]);
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert!(body.get("password").is_none());
    assert!(body.get("passwordEncryption").is_none());
}

#[tokio::test]
async fn should_return_409_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_authenticate(&json!({ "email": get_random_email(), "password": "pw" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "code": "NOT_FOUND_USER", "message": "user not found" }));
}

#[tokio::test]
async fn should_return_409_for_wrong_password() {
    let app = TestApp::new().await;
    let customer = app.register("right").await;

    let response = app
        .post_authenticate(&json!({ "email": customer["email"], "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "EMAIL_OR_PASSWORD");
}

#[tokio::test]
async fn should_return_400_for_empty_password() {
    let app = TestApp::new().await;

    let response = app
        .post_authenticate(&json!({ "email": get_random_email(), "password": "" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_500_with_the_store_error_as_body() {
    let app = TestApp::with_repository(UnavailableUserStore {
        message: "database unavailable",
    })
    .await;

    let response = app
        .post_authenticate(&json!({ "email": get_random_email(), "password": "pw" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!("database unavailable"));
}
