// src/tests/router_tests/api_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, request, sample_context};
use http::Method;
use serde_json::Value;

fn get_json(uri: &str) -> (u16, Value) {
    let ctx = sample_context();
    let resp = handle(request(Method::GET, uri, ""), &ctx).unwrap();
    let status = resp.status().as_u16();
    let value = serde_json::from_str(&body_string(resp)).unwrap();
    (status, value)
}

#[test]
fn api_returns_report_as_json() {
    let (status, json) = get_json("/api/orders/1001");
    assert_eq!(status, 200);
    assert_eq!(json["order_id"], 1001);

    let statuses = json["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["serial"], "A1");
    assert_eq!(statuses[0]["status"], "Delivered");
    assert_eq!(statuses[0]["movement"], "Delivery");
    assert_eq!(statuses[0]["detail"].as_array().unwrap().len(), 2);
    assert_eq!(statuses[0]["detail"][0]["extra"]["type"], "Delivery");
    assert_eq!(statuses[1]["status"], "NoRecords");
    assert!(statuses[1]["movement"].is_null());
}

#[test]
fn api_errors_are_json() {
    let (status, json) = get_json("/api/orders/9999");
    assert_eq!(status, 404);
    assert_eq!(json["status"], 404);

    let (status, json) = get_json("/api/orders/x1");
    assert_eq!(status, 400);
    assert_eq!(json["error"], "Bad Request: Enter a valid OT number");
}

#[test]
fn health_reports_table_sizes() {
    let (status, json) = get_json("/health");
    assert_eq!(status, 200);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["tables"]["shipments"], 3);
    assert_eq!(json["tables"]["outbound"], 1);
}
