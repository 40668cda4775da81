pub mod records;
pub mod resolver;
pub mod serial;
pub mod status;

pub use records::{MovementExtra, MovementRecord, ShipmentRecord};
pub use resolver::{resolve, OrderReport, SerialStatus};
pub use serial::{normalize_serial, parse_order_id, InvalidOrderId};
pub use status::{MovementKind, StatusLabel};
