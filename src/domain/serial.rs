// src/domain/serial.rs

use thiserror::Error;

/// The OT typed into the search form was empty or not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Enter a valid OT number")]
pub struct InvalidOrderId;

/// Canonical comparison key for a serial number.
///
/// The loader stringifies every cell before calling this, so only
/// surrounding whitespace is left to remove. Applying it twice is a no-op.
pub fn normalize_serial(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parses the OT number typed into the search form.
pub fn parse_order_id(raw: &str) -> Result<i64, InvalidOrderId> {
    raw.trim().parse::<i64>().map_err(|_| InvalidOrderId)
}
