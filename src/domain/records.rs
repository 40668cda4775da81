// src/domain/records.rs

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::status::MovementKind;

/// One row of the shipments sheet. Several rows may share an order id
/// and even a serial; all of them are reported.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentRecord {
    /// `None` when the order cell was not an integer; such rows never match.
    pub order_id: Option<i64>,
    /// Normalized serial. Empty for non-serialized material.
    pub serial: String,
    pub material_code: String,
    pub material_description: String,
    pub quantity: Option<f64>,
}

/// One row from any of the four movement sheets.
#[derive(Debug, Clone, Serialize)]
pub struct MovementRecord {
    pub serial: String,
    /// `None` when the date cell was empty or could not be parsed.
    pub event_date: Option<NaiveDateTime>,
    pub sap_code: String,
    pub description: String,
    pub extra: MovementExtra,
}

/// Fields that only some movement sheets carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MovementExtra {
    Delivery {
        id_number: Option<String>,
        technician: Option<String>,
        remarks: Option<String>,
    },
    Inbound,
    Return,
    Outbound {
        remarks: Option<String>,
        contractor_sequence: Option<String>,
    },
}

impl MovementRecord {
    pub fn kind(&self) -> MovementKind {
        match self.extra {
            MovementExtra::Delivery { .. } => MovementKind::Delivery,
            MovementExtra::Inbound => MovementKind::Inbound,
            MovementExtra::Return => MovementKind::Return,
            MovementExtra::Outbound { .. } => MovementKind::Outbound,
        }
    }

    /// Date formatted for display, `-` when missing.
    pub fn date_label(&self) -> String {
        self.event_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
