//! API integration tests
//!
//! Run against a live server with: cargo test -- --ignored

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Unique suffix so tests can be re-run against the same database
fn unique_suffix() -> i64 {
    Utc::now().timestamp_micros()
}

async fn create_publisher(client: &Client, name: &str, city: &str) -> Value {
    let response = client
        .post(format!("{}/publishing/", BASE_URL))
        .json(&json!({
            "publishing_name": name,
            "publishing_city": city
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

async fn create_book(client: &Client, cipher: i64, publishing_id: Option<i64>) -> Value {
    let response = client
        .post(format!("{}/books/", BASE_URL))
        .json(&json!({
            "book_cipher": cipher,
            "book_name": "War and Peace",
            "first_author": "Tolstoy",
            "year_of_publishing": 1869,
            "book_price_rub": 450,
            "copies": 3,
            "publishing_id": publishing_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

async fn create_reader(client: &Client) -> Value {
    let response = client
        .post(format!("{}/readers/", BASE_URL))
        .json(&json!({
            "reader_name": "Anna",
            "surname": "Smirnova",
            "patronymic": "Sergeevna",
            "address": "Lenina 12",
            "phone": "79161234567"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_user() {
    let client = Client::new();
    let email = format!("ivan{}@example.org", unique_suffix());

    let response = client
        .post(format!("{}/users/", BASE_URL))
        .json(&json!({
            "name": "Ivan Petrov",
            "email": email
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let created: Value = response.json().await.expect("Failed to parse response");
    let user_id = created["id"].as_i64().expect("No user ID");

    let response = client
        .get(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["name"], "Ivan Petrov");
    assert_eq!(fetched["email"], email.as_str());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_is_rejected() {
    let client = Client::new();
    let email = format!("dup{}@example.org", unique_suffix());

    let response = client
        .post(format!("{}/users/", BASE_URL))
        .json(&json!({ "name": "First", "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let first: Value = response.json().await.expect("Failed to parse response");
    let first_id = first["id"].as_i64().expect("No user ID");

    // Second registration with the same email must fail
    let response = client
        .post(format!("{}/users/", BASE_URL))
        .json(&json!({ "name": "Second", "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "conflict");

    // The first user is unaffected
    let response = client
        .get(format!("{}/users/{}", BASE_URL, first_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["name"], "First");
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_user_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users/987654321", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore]
async fn test_user_validation_rejects_bad_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users/", BASE_URL))
        .json(&json!({ "name": "Ivan", "email": "not-an-email" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_partial_book_update_keeps_other_fields() {
    let client = Client::new();
    let cipher = unique_suffix() % 1_000_000_000;

    create_book(&client, cipher, None).await;

    // Update copies only
    let response = client
        .put(format!("{}/books/{}", BASE_URL, cipher))
        .json(&json!({ "copies": 0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["copies"], 0);
    assert_eq!(updated["book_name"], "War and Peace");
    assert_eq!(updated["first_author"], "Tolstoy");
    assert_eq!(updated["year_of_publishing"], 1869);
    assert_eq!(updated["book_price_rub"], 450);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/987654321", BASE_URL))
        .json(&json!({ "copies": 1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_publisher_listed_only_with_books() {
    let client = Client::new();

    let with_books = create_publisher(&client, "Mir", "Moscow").await;
    let with_books_id = with_books["id"].as_i64().expect("No publisher ID");

    let empty = create_publisher(&client, "Nauka", "Novosibirsk").await;
    let empty_id = empty["id"].as_i64().expect("No publisher ID");

    let cipher = unique_suffix() % 1_000_000_000;
    create_book(&client, cipher, Some(with_books_id)).await;

    let response = client
        .get(format!("{}/publishing/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let listed = body.as_array().expect("Expected a list");
    let ids: Vec<i64> = listed.iter().filter_map(|p| p["id"].as_i64()).collect();

    assert!(ids.contains(&with_books_id));
    assert!(!ids.contains(&empty_id));
}

#[tokio::test]
#[ignore]
async fn test_overdue_readers() {
    let client = Client::new();

    let reader = create_reader(&client).await;
    let reader_id = reader["id"].as_i64().expect("No reader ID");

    let cipher = unique_suffix() % 1_000_000_000;
    create_book(&client, cipher, None).await;

    // Issue the book a week ago
    let issued = Utc::now() - Duration::days(7);
    let response = client
        .post(format!("{}/issuances/", BASE_URL))
        .json(&json!({
            "reader_id": reader_id,
            "book_cipher": cipher,
            "date_of_issue": issued.to_rfc3339(),
            "signature": "A. Smirnova"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // The reader now shows up in the overdue list
    let response = client
        .get(format!("{}/readers/overdue/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .expect("Expected a list")
        .iter()
        .filter_map(|r| r["id"].as_i64())
        .collect();
    assert!(ids.contains(&reader_id));

    // Returning the book clears the overdue state
    let response = client
        .post(format!(
            "{}/issuances/{}/{}/return",
            BASE_URL, reader_id, cipher
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/readers/overdue/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .expect("Expected a list")
        .iter()
        .filter_map(|r| r["id"].as_i64())
        .collect();
    assert!(!ids.contains(&reader_id));
}

#[tokio::test]
#[ignore]
async fn test_issuance_requires_existing_reader_and_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/issuances/", BASE_URL))
        .json(&json!({
            "reader_id": 987654321,
            "book_cipher": 987654321,
            "signature": "Nobody"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_double_issue_is_rejected() {
    let client = Client::new();

    let reader = create_reader(&client).await;
    let reader_id = reader["id"].as_i64().expect("No reader ID");

    let cipher = unique_suffix() % 1_000_000_000;
    create_book(&client, cipher, None).await;

    let body = json!({
        "reader_id": reader_id,
        "book_cipher": cipher,
        "signature": "A. Smirnova"
    });

    let response = client
        .post(format!("{}/issuances/", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/issuances/", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
