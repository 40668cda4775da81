// src/domain/resolver.rs

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::records::{MovementRecord, ShipmentRecord};
use crate::domain::status::{MovementKind, StatusLabel};

/// Current standing of one shipped serial.
#[derive(Debug, Clone, Serialize)]
pub struct SerialStatus {
    pub serial: String,
    /// Kind of the latest dated movement, `None` when there is none.
    pub movement: Option<MovementKind>,
    pub event_date: Option<NaiveDateTime>,
    /// From the latest movement, or from the shipment row when there is none.
    pub sap_code: String,
    pub description: String,
    pub quantity: Option<f64>,
    pub status: StatusLabel,
    /// Every dated movement for the serial, newest first. The first entry
    /// is the one the status was derived from.
    pub detail: Vec<MovementRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderReport {
    pub order_id: i64,
    pub statuses: Vec<SerialStatus>,
}

/// Builds the status report for a work order.
///
/// Returns `None` when the shipments sheet has no row for `order_id`.
/// Output has one entry per shipment row, in sheet order.
pub fn resolve(dataset: &Dataset, order_id: i64) -> Option<OrderReport> {
    let statuses: Vec<SerialStatus> = dataset
        .shipments
        .iter()
        .filter(|s| s.order_id == Some(order_id))
        .map(|shipment| resolve_serial(dataset, shipment))
        .collect();

    if statuses.is_empty() {
        return None;
    }

    Some(OrderReport { order_id, statuses })
}

fn resolve_serial(dataset: &Dataset, shipment: &ShipmentRecord) -> SerialStatus {
    let mut detail: Vec<MovementRecord> = dated_movements(dataset, &shipment.serial)
        .into_iter()
        .cloned()
        .collect();
    // Stable sort: on equal dates the earlier candidate in scan order stays first.
    detail.sort_by(|a, b| b.event_date.cmp(&a.event_date));

    if detail.is_empty() {
        return SerialStatus {
            serial: shipment.serial.clone(),
            movement: None,
            event_date: None,
            sap_code: shipment.material_code.clone(),
            description: shipment.material_description.clone(),
            quantity: shipment.quantity,
            status: StatusLabel::NoRecords,
            detail,
        };
    }

    let latest = &detail[0];
    let kind = latest.kind();
    let event_date = latest.event_date;
    let sap_code = latest.sap_code.clone();
    let description = latest.description.clone();

    SerialStatus {
        serial: shipment.serial.clone(),
        movement: Some(kind),
        event_date,
        sap_code,
        description,
        quantity: shipment.quantity,
        status: StatusLabel::from_latest(Some(kind)),
        detail,
    }
}

/// Movements with a usable date for `serial`, in scan order: sheets by
/// `MovementKind::SCAN_ORDER`, rows in sheet order.
fn dated_movements<'a>(dataset: &'a Dataset, serial: &str) -> Vec<&'a MovementRecord> {
    if serial.is_empty() {
        return Vec::new();
    }

    MovementKind::SCAN_ORDER
        .iter()
        .flat_map(|kind| dataset.movements(*kind))
        .filter(|m| m.serial == serial && m.event_date.is_some())
        .collect()
}
