use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Workbook download named `<stem>.xlsx`. Reports are rebuilt per request,
/// so they are never cached.
pub fn xlsx_response(buffer: Vec<u8>, stem: &str) -> ResultResp {
    let filename = attachment_filename(stem);

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .header("Content-Length", buffer.len())
        .header("Cache-Control", "no-store")
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

/// Keeps ASCII letters, digits, `-` and `_`; anything else becomes `_`.
pub fn attachment_filename(stem: &str) -> String {
    let clean: String = stem
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if clean.is_empty() {
        "report.xlsx".to_string()
    } else {
        format!("{clean}.xlsx")
    }
}
