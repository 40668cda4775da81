pub mod report_xlsx;

pub use report_xlsx::{export_report_xlsx, write_report_workbook};
