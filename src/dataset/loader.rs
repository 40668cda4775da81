// src/dataset/loader.rs

use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use tracing::info;

use crate::dataset::cells::{
    cell_to_datetime, cell_to_number, cell_to_optional_string, cell_to_order_id, cell_to_string,
};
use crate::dataset::columns::*;
use crate::dataset::sheet::{cell, Sheet};
use crate::dataset::{Dataset, LoadError};
use crate::domain::{MovementExtra, MovementKind, MovementRecord, ShipmentRecord};

/// Reads all five sheets from the workbook at `path`.
pub fn load_workbook(path: &Path) -> Result<Dataset, LoadError> {
    let mut workbook = open_workbook::<Xlsx<_>, _>(path).map_err(|e| LoadError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut read_sheet = |name: &str| -> Result<Sheet, LoadError> {
        if !workbook.sheet_names().iter().any(|s| s == name) {
            return Err(LoadError::MissingSheet(name.to_string()));
        }
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| LoadError::Sheet {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Sheet::from_range(name, &range))
    };

    let shipments = read_sheet(SHIPMENTS_SHEET)?;
    let deliveries = read_sheet(movement_columns(MovementKind::Delivery).sheet)?;
    let inbound = read_sheet(movement_columns(MovementKind::Inbound).sheet)?;
    let returns = read_sheet(movement_columns(MovementKind::Return).sheet)?;
    let outbound = read_sheet(movement_columns(MovementKind::Outbound).sheet)?;

    let dataset = Dataset {
        shipments: read_shipments(&shipments)?,
        deliveries: read_movements(&deliveries, MovementKind::Delivery)?,
        inbound: read_movements(&inbound, MovementKind::Inbound)?,
        returns: read_movements(&returns, MovementKind::Return)?,
        outbound: read_movements(&outbound, MovementKind::Outbound)?,
    };

    let counts = dataset.counts();
    info!(
        path = %path.display(),
        shipments = counts.shipments,
        deliveries = counts.deliveries,
        inbound = counts.inbound,
        returns = counts.returns,
        outbound = counts.outbound,
        "dataset loaded"
    );

    Ok(dataset)
}

pub fn read_shipments(sheet: &Sheet) -> Result<Vec<ShipmentRecord>, LoadError> {
    let order = sheet.column(SHIPMENT_ORDER)?;
    let serial = sheet.column(SHIPMENT_SERIAL)?;
    let material = sheet.column(SHIPMENT_MATERIAL)?;
    let description = sheet.column(SHIPMENT_DESCRIPTION)?;
    let quantity = sheet.column(SHIPMENT_QUANTITY)?;

    let records = sheet
        .rows()
        .iter()
        .map(|row| ShipmentRecord {
            order_id: cell_to_order_id(cell(row, order)),
            serial: cell_to_string(cell(row, serial)),
            material_code: cell_to_string(cell(row, material)),
            material_description: cell_to_string(cell(row, description)),
            quantity: cell_to_number(cell(row, quantity)),
        })
        .collect();

    Ok(records)
}

/// Rows without a serial are dropped since nothing can ever match them.
pub fn read_movements(sheet: &Sheet, kind: MovementKind) -> Result<Vec<MovementRecord>, LoadError> {
    let cols = movement_columns(kind);
    let serial_col = sheet.column(cols.serial)?;
    let date_col = sheet.column(cols.date)?;
    let sap_col = sheet.column(cols.sap_code)?;
    let description_col = sheet.column(cols.description)?;

    let optional = |row: &[calamine::Data], header: &str| {
        sheet
            .optional_column(header)
            .and_then(|idx| cell_to_optional_string(cell(row, idx)))
    };

    let records = sheet
        .rows()
        .iter()
        .filter_map(|row| {
            let serial = cell_to_string(cell(row, serial_col));
            if serial.is_empty() {
                return None;
            }

            let extra = match kind {
                MovementKind::Delivery => MovementExtra::Delivery {
                    id_number: optional(row, DELIVERY_ID_NUMBER),
                    technician: optional(row, DELIVERY_TECHNICIAN),
                    remarks: optional(row, DELIVERY_REMARKS),
                },
                MovementKind::Inbound => MovementExtra::Inbound,
                MovementKind::Return => MovementExtra::Return,
                MovementKind::Outbound => MovementExtra::Outbound {
                    remarks: optional(row, OUTBOUND_REMARKS),
                    contractor_sequence: optional(row, OUTBOUND_CONTRACTOR_SEQUENCE),
                },
            };

            Some(MovementRecord {
                serial,
                event_date: cell_to_datetime(cell(row, date_col)),
                sap_code: cell_to_string(cell(row, sap_col)),
                description: cell_to_string(cell(row, description_col)),
                extra,
            })
        })
        .collect();

    Ok(records)
}
