mod common;

use common::{spawn_app, unreachable_config};
use pgprobe::config::DbConfig;

const FAILED_BODY: &str = r#"{"status":"DB Connection Failed"}"#;

#[tokio::test]
async fn db_check_reports_failure_for_unreachable_host() {
    let address = spawn_app(unreachable_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/db"))
        .send()
        .await
        .expect("Failed to execute request");

    // Failure is still reported with 200, not an error status
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, FAILED_BODY);
}

#[tokio::test]
async fn db_check_reports_failure_for_empty_config() {
    let address = spawn_app(DbConfig::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/db"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, FAILED_BODY);
}

#[tokio::test]
async fn distinct_failure_causes_share_one_body() {
    let client = reqwest::Client::new();

    let unreachable = spawn_app(unreachable_config()).await;
    let body_unreachable = client
        .get(format!("{unreachable}/db"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read response body");

    let misconfigured = spawn_app(DbConfig::default()).await;
    let body_misconfigured = client
        .get(format!("{misconfigured}/db"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read response body");

    assert_eq!(body_unreachable, body_misconfigured);
}
