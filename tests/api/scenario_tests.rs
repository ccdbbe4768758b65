//! End-to-end flows across both resources

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{TestApp, APPLE};

#[tokio::test]
async fn test_invoice_lifecycle_then_company_delete() {
    let app = TestApp::new();
    let (code, name, description) = APPLE;
    app.seed_company(code, name, description).await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({ "comp_code": "apple", "amt": 50 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let invoice = response.json::<Value>()["invoice"].clone();
    assert_eq!(invoice["paid"], false);
    let id = invoice["id"].as_i64().unwrap();

    let fetched = app.server.get(&format!("/invoices/{}", id)).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["invoice"]["company"]["code"], "apple");

    app.server
        .delete(&format!("/invoices/{}", id))
        .await
        .assert_status_ok();

    let response = app.server.delete("/companies/apple").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));
}

#[tokio::test]
async fn test_company_delete_blocked_by_invoices() {
    let app = TestApp::new();
    let (code, name, description) = APPLE;
    app.seed_company(code, name, description).await;
    let first = app.seed_invoice("apple", 10.0).await;
    let second = app.seed_invoice("apple", 20.0).await;

    let response = app.server.delete("/companies/apple").await;
    response.assert_status(StatusCode::CONFLICT);

    // Invoice ids are listed on the company
    let company = app.server.get("/companies/apple").await.json::<Value>();
    assert_eq!(
        company["company"]["invoices"],
        json!([first["id"], second["id"]])
    );

    app.server
        .delete(&format!("/invoices/{}", first["id"]))
        .await
        .assert_status_ok();
    app.server
        .delete("/companies/apple")
        .await
        .assert_status(StatusCode::CONFLICT);

    app.server
        .delete(&format!("/invoices/{}", second["id"]))
        .await
        .assert_status_ok();
    app.server
        .delete("/companies/apple")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_company_code_survives_update() {
    let app = TestApp::new();
    let (code, name, description) = APPLE;
    app.seed_company(code, name, description).await;
    app.seed_invoice("apple", 75.0).await;

    app.server
        .put("/companies/apple")
        .json(&json!({ "name": "Apple Computer", "description": null }))
        .await
        .assert_status_ok();

    let invoices = app.server.get("/invoices").await.json::<Value>();
    assert_eq!(invoices["invoices"][0]["comp_code"], "apple");

    let company = app.server.get("/companies/apple").await.json::<Value>();
    assert_eq!(company["company"]["name"], "Apple Computer");
    assert!(company["company"]["description"].is_null());
}
