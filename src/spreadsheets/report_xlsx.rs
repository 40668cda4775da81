use crate::domain::OrderReport;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 8] = [
    "Serial",
    "Movement",
    "Date",
    "Status",
    "SAP code",
    "Description",
    "Quantity",
    "History",
];

pub fn export_report_xlsx(report: &OrderReport) -> ResultResp {
    let buffer = write_report_workbook(report)?;
    xlsx_response(buffer, &format!("ot_{}", report.order_id))
}

/// One row per shipped item, in the same order as the results page.
pub fn write_report_workbook(report: &OrderReport) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name(format!("OT {}", report.order_id))
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {}", e)))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, status) in report.statuses.iter().enumerate() {
        let r = (i + 1) as u32;

        let movement = status.movement.map(|k| k.as_str()).unwrap_or("");
        let date = status
            .event_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        worksheet
            .write_string(r, 0, &status.serial)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write serial: {}", e)))?;

        worksheet
            .write_string(r, 1, movement)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write movement: {}", e)))?;

        worksheet
            .write_string(r, 2, &date)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;

        worksheet
            .write_string(r, 3, status.status.as_str())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        worksheet
            .write_string(r, 4, &status.sap_code)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write SAP code: {}", e)))?;

        worksheet
            .write_string(r, 5, &status.description)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write description: {}", e)))?;

        if let Some(quantity) = status.quantity {
            worksheet
                .write_number(r, 6, quantity)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write quantity: {}", e)))?;
        }

        worksheet
            .write_number(r, 7, status.detail.len() as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write history: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
