// src/tests/router_tests/search_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, expect_err, request, sample_context};
use http::Method;

#[test]
fn home_page_renders_search_form() {
    let ctx = sample_context();

    let resp = handle(request(Method::GET, "/", ""), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("action=\"/search\""));
    assert!(body.contains("name=\"ot\""));
}

#[test]
fn post_search_lists_serials_in_order() {
    let ctx = sample_context();

    let resp = handle(request(Method::POST, "/search", "ot=1001"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let a1 = body.find("<td>A1</td>").expect("A1 row");
    let a2 = body.find("A2 (quantity: 1)").expect("A2 row");
    assert!(a1 < a2);
    assert!(body.contains("Delivered"));
    assert!(body.contains("2024-01-10"));
    assert!(body.contains("No records"));
    assert!(body.contains("Technician: Laura Gomez"));
    assert!(body.contains("/export?ot=1001"));
}

#[test]
fn get_search_accepts_query_string() {
    let ctx = sample_context();

    let resp = handle(request(Method::GET, "/search?ot=%202002%20", ""), &ctx).unwrap();
    let body = body_string(resp);
    assert!(body.contains("C1"));
    assert!(body.contains("Available"));
}

#[test]
fn invalid_input_shows_validation_message() {
    let ctx = sample_context();

    let resp = handle(request(Method::POST, "/search", "ot=abc"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Enter a valid OT number"));

    let resp = handle(request(Method::POST, "/search", ""), &ctx).unwrap();
    assert!(body_string(resp).contains("Enter a valid OT number"));
}

#[test]
fn unknown_order_shows_not_found_message() {
    let ctx = sample_context();

    let resp = handle(request(Method::POST, "/search", "ot=9999"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No records found for OT 9999"));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = sample_context();

    let err = expect_err(handle(request(Method::GET, "/nope", ""), &ctx));
    assert_eq!(err.status(), 404);
}
