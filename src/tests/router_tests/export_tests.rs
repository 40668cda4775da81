// src/tests/router_tests/export_tests.rs

use crate::domain::resolve;
use crate::responses::attachment_filename;
use crate::router::handle;
use crate::spreadsheets::write_report_workbook;
use crate::tests::utils::{body_bytes, expect_err, request, sample_context, sample_dataset};
use http::Method;

#[test]
fn export_downloads_workbook() {
    let ctx = sample_context();

    let resp = handle(request(Method::GET, "/export?ot=1001", ""), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"ot_1001.xlsx\"");
    assert_eq!(
        resp.headers().get("Cache-Control").and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    // xlsx files are zip archives
    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_of_unknown_order_is_not_found() {
    let ctx = sample_context();

    let err = expect_err(handle(request(Method::GET, "/export?ot=9999", ""), &ctx));
    assert_eq!(err.status(), 404);

    let err = expect_err(handle(request(Method::GET, "/export", ""), &ctx));
    assert_eq!(err.status(), 400);
}

#[test]
fn workbook_writer_handles_rows_without_history() {
    let report = resolve(&sample_dataset(), 1001).unwrap();
    let buffer = write_report_workbook(&report).unwrap();
    assert!(!buffer.is_empty());
}

#[test]
fn attachment_names_are_header_safe() {
    assert_eq!(attachment_filename("ot_1001"), "ot_1001.xlsx");
    assert_eq!(attachment_filename("ot_-7"), "ot_-7.xlsx");
    assert_eq!(attachment_filename("a\"b;c d"), "a_b_c_d.xlsx");
    assert_eq!(attachment_filename("  "), "report.xlsx");
}
