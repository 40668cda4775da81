pub mod cells;
pub mod columns;
pub mod loader;
pub mod sheet;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{MovementKind, MovementRecord, ShipmentRecord};

pub use loader::{load_workbook, read_movements, read_shipments};
pub use sheet::Sheet;

/// Startup failures. Any of these stops the server before it binds.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open workbook {path}: {message}")]
    Open { path: String, message: String },

    #[error("workbook has no sheet named '{0}'")]
    MissingSheet(String),

    #[error("sheet '{sheet}' is missing column '{column}'")]
    MissingColumn { sheet: String, column: String },

    #[error("failed to read sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },
}

/// The five tables, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub shipments: Vec<ShipmentRecord>,
    pub deliveries: Vec<MovementRecord>,
    pub inbound: Vec<MovementRecord>,
    pub returns: Vec<MovementRecord>,
    pub outbound: Vec<MovementRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub shipments: usize,
    pub deliveries: usize,
    pub inbound: usize,
    pub returns: usize,
    pub outbound: usize,
}

impl Dataset {
    pub fn movements(&self, kind: MovementKind) -> &[MovementRecord] {
        match kind {
            MovementKind::Delivery => &self.deliveries,
            MovementKind::Inbound => &self.inbound,
            MovementKind::Return => &self.returns,
            MovementKind::Outbound => &self.outbound,
        }
    }

    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            shipments: self.shipments.len(),
            deliveries: self.deliveries.len(),
            inbound: self.inbound.len(),
            returns: self.returns.len(),
            outbound: self.outbound.len(),
        }
    }
}
