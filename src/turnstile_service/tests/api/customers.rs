use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_201_and_the_stored_customer() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .post_customers(&json!({
            "name": "any_name",
            "email": email,
            "password": "any_password",
            "city": "Lisbon",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], email);
    assert_eq!(body["city"], "Lisbon");
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("argon2"));
}

#[tokio::test]
async fn should_return_409_if_email_already_registered() {
    let app = TestApp::new().await;
    let existing = app.register("any_password").await;

    let response = app.post_customers(&existing).await;

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "name": "any_name", "email": "not-an-email", "password": "any_password" }),
        json!({ "name": "any_name", "email": get_random_email(), "password": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_customers(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app
        .post_customers(&json!({ "email": get_random_email() }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
