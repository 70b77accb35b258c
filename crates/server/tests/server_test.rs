//! # Basic Server Tests
//!
//! Health check, the empty form page and the download endpoint.

mod common;

use anyhow::Result;
use common::TestApp;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header, multipart::Form};

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.client.get(app.url("/health")).send().await?;

    assert!(response.status().is_success());
    assert_eq!(response.text().await?, "OK");
    Ok(())
}

#[tokio::test]
async fn test_index_renders_form_with_defaults() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.client.get(app.url("/")).send().await?;
    assert!(response.status().is_success());
    let content_type = response.headers()[header::CONTENT_TYPE].to_str()?.to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await?;
    assert!(body.contains("Tiny RFP Assistant"));
    assert!(body.contains("name=\"rfp_text\""));
    assert!(body.contains("accept=\".pdf,.txt"));
    assert!(body.contains("<option value=\"gpt-3.5-turbo\" selected>"));
    assert!(body.contains("<option value=\"gpt-4o-mini\">"));
    assert!(body.contains("value=\"0.2\""));
    assert!(body.contains("value=\"1000\""));
    assert!(!body.contains("Raw model output"));
    Ok(())
}

#[tokio::test]
async fn test_download_returns_attachment() -> Result<()> {
    let app = TestApp::spawn().await?;
    let raw = "{\"summary\": [\"Café fit-out\"]}\nline two\n";

    let response = app
        .client
        .post(app.url("/download"))
        .form(&[("raw_base64", STANDARD.encode(raw))])
        .send()
        .await?;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"rfp_draft_response.txt\""
    );
    assert_eq!(response.bytes().await?.as_ref(), raw.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_download_from_result_page_keeps_line_endings() -> Result<()> {
    let app = TestApp::spawn().await?;
    let raw = "{\n  \"summary\": [\"Line one\"],\n  \"items\": [],\n  \"missing_info\": []\n}";
    let mock = app.mock_completion(raw);

    let page = app
        .client
        .post(app.url("/draft"))
        .multipart(Form::new().text("rfp_text", "Q1. Anything?"))
        .send()
        .await?
        .text()
        .await?;
    mock.assert_hits(1);

    let marker = "name=\"raw_base64\" value=\"";
    let start = page.find(marker).expect("download form present") + marker.len();
    let end = start + page[start..].find('"').expect("closing quote");
    let encoded = &page[start..end];

    let downloaded = app
        .client
        .post(app.url("/download"))
        .form(&[("raw_base64", encoded)])
        .send()
        .await?
        .bytes()
        .await?;

    assert_eq!(downloaded.as_ref(), raw.as_bytes());
    assert!(!downloaded.contains(&b'\r'));
    Ok(())
}

#[tokio::test]
async fn test_download_rejects_invalid_payload() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/download"))
        .form(&[("raw_base64", "***")])
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    Ok(())
}
