use std::collections::HashSet;
use std::sync::Arc;

use lead_intake::routes::LeadResponse;
use uuid::Uuid;

use crate::helpers::{FailingSink, spawn_app, spawn_app_with_sink, valid_lead};

#[tokio::test]
async fn lead_returns_200_for_valid_data() {
    let app = spawn_app().await;

    let response = app.post_lead(&valid_lead()).await;

    assert_eq!(200, response.status().as_u16());
    let body: LeadResponse = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Lead captured successfully");
    assert!(Uuid::parse_str(&body.lead_id).is_ok());
}

#[tokio::test]
async fn lead_accepts_only_required_fields() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "is_owner": false,
        "city": "Porto",
        "full_name": "Ana Costa"
    });

    let response = app.post_lead(&body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn lead_is_recorded_with_the_returned_id_and_timestamp() {
    let app = spawn_app().await;

    let response = app.post_lead(&valid_lead()).await;
    let body: LeadResponse = response.json().await.unwrap();

    let records = app.sink.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["lead_id"], body.lead_id);
    assert_eq!(
        record["created_at"].as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().unwrap(),
        body.timestamp
    );
    assert_eq!(record["data"]["full_name"], "Ursula Le Guin");
    assert_eq!(record["data"]["city"], "Lisbon");
    assert_eq!(record["data"]["website"], "https://clinic.example.com");
    assert_eq!(record["data"]["monthly_appointments"], 120);
    assert_eq!(record["data"]["is_owner"], true);
}

#[tokio::test]
async fn lead_ids_are_unique_across_sequential_submissions() {
    let app = spawn_app().await;
    let mut ids = HashSet::new();

    for _ in 0..10 {
        let body: LeadResponse = app.post_lead(&valid_lead()).await.json().await.unwrap();
        ids.insert(body.lead_id);
    }

    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn lead_ids_are_unique_across_concurrent_submissions() {
    let app = Arc::new(spawn_app().await);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let body: LeadResponse = app.post_lead(&valid_lead()).await.json().await.unwrap();
                body.lead_id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(app.sink.records().len(), 20);
}

#[tokio::test]
async fn lead_returns_400_when_full_name_is_blank() {
    let app = spawn_app().await;

    for name in ["", "   ", "\t\n"] {
        let mut body = valid_lead();
        body["full_name"] = serde_json::json!(name);

        let response = app.post_lead(&body).await;

        assert_eq!(400, response.status().as_u16());
        let error: serde_json::Value = response.json().await.unwrap();
        assert_eq!(error["detail"], "Full name is required");
    }

    assert!(app.sink.records().is_empty());
}

#[tokio::test]
async fn lead_returns_400_when_city_is_blank() {
    let app = spawn_app().await;
    let mut body = valid_lead();
    body["city"] = serde_json::json!("");

    let response = app.post_lead(&body).await;

    assert_eq!(400, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["detail"], "City is required");
}

#[tokio::test]
async fn lead_reports_full_name_first_when_both_are_blank() {
    let app = spawn_app().await;
    let mut body = valid_lead();
    body["full_name"] = serde_json::json!(" ");
    body["city"] = serde_json::json!(" ");

    let response = app.post_lead(&body).await;

    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["detail"], "Full name is required");
}

#[tokio::test]
async fn lead_rejects_invalid_website_before_checking_names() {
    let app = spawn_app().await;
    let mut body = valid_lead();
    body["website"] = serde_json::json!("not-a-url");
    body["full_name"] = serde_json::json!("");

    let response = app.post_lead(&body).await;

    assert_eq!(400, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    let detail = error["detail"].as_str().unwrap();
    assert!(detail.contains("website"), "unexpected detail: {detail}");
    assert!(app.sink.records().is_empty());
}

#[tokio::test]
async fn lead_returns_400_for_malformed_payloads() {
    let app = spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({"city": "Lisbon", "full_name": "Ana"}), "missing is_owner"),
        (serde_json::json!({"is_owner": true, "full_name": "Ana"}), "missing city"),
        (serde_json::json!({"is_owner": "yes", "city": "Lisbon", "full_name": "Ana"}), "is_owner as text"),
        (
            serde_json::json!({"is_owner": true, "city": "Lisbon", "full_name": "Ana", "monthly_appointments": 2.5}),
            "fractional appointments",
        ),
        (
            serde_json::json!({"is_owner": true, "city": "Lisbon", "full_name": "Ana", "ad_budget": "lots"}),
            "ad_budget as text",
        ),
        (serde_json::json!([]), "an array"),
    ];

    for (body, description) in test_cases {
        let response = app.post_lead(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }

    assert!(app.sink.records().is_empty());
}

#[tokio::test]
async fn lead_returns_400_for_a_body_that_is_not_json() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/api/chatbot/lead", &app.address))
        .header("Content-Type", "application/json")
        .body("{\"is_owner\": tru")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(error["detail"].is_string());
}

#[tokio::test]
async fn lead_returns_500_without_details_when_recording_fails() {
    let app = spawn_app_with_sink(Arc::new(FailingSink)).await;

    let response = app.post_lead(&valid_lead()).await;

    assert_eq!(500, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["detail"], "Internal Server Error");
}
