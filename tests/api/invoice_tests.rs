//! Invoice API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{today, TestApp, APPLE};

async fn app_with_apple() -> TestApp {
    let app = TestApp::new();
    let (code, name, description) = APPLE;
    app.seed_company(code, name, description).await;
    app
}

#[tokio::test]
async fn test_list_invoices() {
    let app = app_with_apple().await;
    let first = app.seed_invoice("apple", 100.0).await;
    let second = app.seed_invoice("apple", 200.0).await;

    let response = app.server.get("/invoices").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "invoices": [
                { "id": first["id"], "comp_code": "apple" },
                { "id": second["id"], "comp_code": "apple" }
            ]
        })
    );
}

#[tokio::test]
async fn test_create_invoice_applies_defaults() {
    let app = app_with_apple().await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({ "comp_code": "apple", "amt": 100 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let invoice = response.json::<Value>()["invoice"].clone();
    assert!(invoice["id"].is_i64());
    assert_eq!(invoice["comp_code"], "apple");
    assert_eq!(invoice["amt"], 100.0);
    assert_eq!(invoice["paid"], false);
    assert_eq!(invoice["add_date"], today());
    assert!(invoice["paid_date"].is_null());
}

#[tokio::test]
async fn test_create_then_get_embeds_company() {
    let app = app_with_apple().await;
    let created = app.seed_invoice("apple", 100.0).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.server.get(&format!("/invoices/{}", id)).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "invoice": {
                "id": id,
                "amt": 100.0,
                "paid": false,
                "add_date": today(),
                "paid_date": null,
                "company": { "code": "apple", "name": "Apple", "description": "Maker of tech" }
            }
        })
    );
}

#[tokio::test]
async fn test_create_accepts_numeric_string_amount() {
    let app = app_with_apple().await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({ "comp_code": "apple", "amt": "42.5" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["invoice"]["amt"], 42.5);
}

#[tokio::test]
async fn test_create_for_unknown_company_conflicts() {
    let app = app_with_apple().await;

    let response = app
        .server
        .post("/invoices")
        .json(&json!({ "comp_code": "ghost", "amt": 10 }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let invoices = app.server.get("/invoices").await.json::<Value>();
    assert_eq!(invoices, json!({ "invoices": [] }));
}

#[test_case(json!({ "amt": 10 }) ; "missing comp_code")]
#[test_case(json!({ "comp_code": "apple" }) ; "missing amt")]
#[test_case(json!({ "comp_code": "apple", "amt": "lots" }) ; "non numeric amt")]
#[test_case(json!({ "comp_code": "apple", "amt": 0 }) ; "zero amt")]
#[test_case(json!({ "comp_code": "apple", "amt": -3 }) ; "negative amt")]
#[test_case(json!({ "comp_code": "apple", "amt": 5, "id": 99 }) ; "client supplied id")]
#[test_case(json!({ "comp_code": "ap\u{0}ple", "amt": 5 }) ; "nul in comp_code")]
#[tokio::test]
async fn test_create_invalid_payload(body: Value) {
    let app = app_with_apple().await;

    let response = app.server.post("/invoices").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_invoice_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/invoices/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_invoice_id_is_bad_request() {
    let app = TestApp::new();

    app.server
        .get("/invoices/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .delete("/invoices/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_invoice_changes_amount_only() {
    let app = app_with_apple().await;
    let created = app.seed_invoice("apple", 100.0).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/invoices/{}", id))
        .json(&json!({ "amt": 250 }))
        .await;

    response.assert_status_ok();
    let mut expected = created.clone();
    expected["amt"] = json!(250.0);
    assert_eq!(response.json::<Value>(), json!({ "invoice": expected }));
}

#[tokio::test]
async fn test_update_unknown_invoice_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/invoices/999")
        .json(&json!({ "amt": 10 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_case(json!({}) ; "missing amt")]
#[test_case(json!({ "amt": "abc" }) ; "malformed amt")]
#[test_case(json!({ "amt": 10, "id": 5 }) ; "id present")]
#[test_case(json!({ "amt": 10, "comp_code": "ibm" }) ; "comp_code present")]
#[tokio::test]
async fn test_update_invalid_payload(body: Value) {
    let app = app_with_apple().await;
    let created = app.seed_invoice("apple", 100.0).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/invoices/{}", id))
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_invoice() {
    let app = app_with_apple().await;
    let created = app.seed_invoice("apple", 100.0).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/invoices/{}", id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));
    app.server
        .delete(&format!("/invoices/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
