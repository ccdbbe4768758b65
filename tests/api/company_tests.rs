//! Company API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{fake_company_name, unique_code, TestApp};

#[tokio::test]
async fn test_list_companies_empty() {
    let app = TestApp::new();

    let response = app.server.get("/companies").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "companies": [] }));
}

#[tokio::test]
async fn test_list_companies_ordered_projection() {
    let app = TestApp::new();
    app.seed_company("ibm", "IBM", "Big blue").await;
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app.server.get("/companies").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "companies": [
                { "code": "apple", "name": "Apple" },
                { "code": "ibm", "name": "IBM" }
            ]
        })
    );
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields_and_no_invoices() {
    let app = TestApp::new();
    let code = unique_code();
    let name = fake_company_name();

    let response = app
        .server
        .post("/companies")
        .json(&json!({ "code": code, "name": name, "description": "Widgets" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "company": { "code": code, "name": name, "description": "Widgets" } })
    );

    let response = app.server.get(&format!("/companies/{}", code)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "company": { "code": code, "name": name, "description": "Widgets", "invoices": [] }
        })
    );
}

#[tokio::test]
async fn test_create_without_description() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/companies")
        .json(&json!({ "code": "acme", "name": "Acme" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<Value>()["company"]["description"].is_null());
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let app = TestApp::new();
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app
        .server
        .post("/companies")
        .json(&json!({ "code": "apple", "name": "Other Apple" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["status"], 409);
}

#[test_case(json!({ "name": "No Code" }) ; "missing code")]
#[test_case(json!({ "code": "nn" }) ; "missing name")]
#[test_case(json!({ "code": "", "name": "Empty" }) ; "empty code")]
#[test_case(json!({ "code": 12, "name": "Numeric" }) ; "numeric code")]
#[test_case(json!(["apple"]) ; "array body")]
#[test_case(json!({ "code": "ap\u{0}ple", "name": "Apple" }) ; "nul in code")]
#[test_case(json!({ "code": "apple", "name": "Ap\u{0}ple" }) ; "nul in name")]
#[test_case(json!({ "code": "apple", "name": "Apple", "description": "\u{0}" }) ; "nul in description")]
#[tokio::test]
async fn test_create_invalid_payload(body: Value) {
    let app = TestApp::new();

    let response = app.server.post("/companies").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.send_raw("POST", "/companies", None, "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .send_raw("POST", "/companies", Some("application/json"), "")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_company_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/companies/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": { "message": "No matching company: nope", "status": 404 } })
    );
}

#[tokio::test]
async fn test_nul_in_code_path_is_bad_request() {
    let app = TestApp::new();

    app.server
        .get("/companies/ap%00ple")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .delete("/companies/ap%00ple")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_with_nul_in_name_is_bad_request() {
    let app = TestApp::new();
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app
        .server
        .put("/companies/apple")
        .json(&json!({ "name": "Ap\u{0}ple" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let company = app.server.get("/companies/apple").await.json::<Value>();
    assert_eq!(company["company"]["name"], "Apple");
}

#[tokio::test]
async fn test_update_company() {
    let app = TestApp::new();
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app
        .server
        .put("/companies/apple")
        .json(&json!({ "name": "Apple Inc.", "description": "Phones" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "company": { "code": "apple", "name": "Apple Inc.", "description": "Phones" } })
    );
}

#[test_case(json!({ "code": "pear", "name": "Pear" }) ; "new code")]
#[test_case(json!({ "code": "apple", "name": "Apple" }) ; "same code")]
#[test_case(json!({ "code": null }) ; "null code only")]
#[tokio::test]
async fn test_update_with_code_is_rejected(body: Value) {
    let app = TestApp::new();
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app.server.put("/companies/apple").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // Row untouched
    let company = app.server.get("/companies/apple").await.json::<Value>();
    assert_eq!(company["company"]["name"], "Apple");
}

#[tokio::test]
async fn test_update_unknown_company_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/companies/nope")
        .json(&json!({ "name": "Nobody" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_company() {
    let app = TestApp::new();
    app.seed_company("apple", "Apple", "Maker of tech").await;

    let response = app.server.delete("/companies/apple").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));
    app.server
        .get("/companies/apple")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_company_is_not_found() {
    let app = TestApp::new();

    let response = app.server.delete("/companies/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
