pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::html_response;
pub use json::{json_error_response, json_response};
pub use xlsx::{attachment_filename, xlsx_response};
