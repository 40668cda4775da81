// src/dataset/columns.rs
//
// Sheet and header names exactly as they appear in the source workbook.

use crate::domain::MovementKind;

pub const SHIPMENTS_SHEET: &str = "ENVIOS";
pub const SHIPMENT_ORDER: &str = "OTP";
pub const SHIPMENT_SERIAL: &str = "NºSerieFab";
pub const SHIPMENT_MATERIAL: &str = "Material";
pub const SHIPMENT_DESCRIPTION: &str = "Texto breve de material";
pub const SHIPMENT_QUANTITY: &str = "Ctd.en UM entrada";

pub const DELIVERY_ID_NUMBER: &str = "Cedula";
pub const DELIVERY_TECHNICIAN: &str = "Técnico";
pub const DELIVERY_REMARKS: &str = "Observaciones";
pub const OUTBOUND_REMARKS: &str = "Observación";
pub const OUTBOUND_CONTRACTOR_SEQUENCE: &str = "Consecutivo Contratista";

/// Required columns of a movement sheet.
#[derive(Debug, Clone, Copy)]
pub struct MovementColumns {
    pub sheet: &'static str,
    pub serial: &'static str,
    pub date: &'static str,
    pub sap_code: &'static str,
    pub description: &'static str,
}

pub fn movement_columns(kind: MovementKind) -> MovementColumns {
    match kind {
        MovementKind::Delivery => MovementColumns {
            sheet: "ENTREGAS",
            serial: "Serial",
            date: "Fecha Sistema",
            sap_code: "Codigo SAP",
            description: "Descripción SAP",
        },
        MovementKind::Inbound => MovementColumns {
            sheet: "ENTRADAS",
            serial: "Serial",
            date: "Fecha Ingreso",
            sap_code: "Codigo SAP",
            description: "Descripción",
        },
        MovementKind::Return => MovementColumns {
            sheet: "DEVOLUCIONES",
            serial: "Serial",
            date: "FECHA SISTEMA.",
            sap_code: "Codigo SAP",
            description: "Descripción",
        },
        MovementKind::Outbound => MovementColumns {
            sheet: "SALIDAS",
            serial: "Serial",
            date: "Fecha Salida",
            sap_code: "Codigo SAP",
            description: "Descripción",
        },
    }
}
