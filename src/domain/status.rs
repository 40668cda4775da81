// src/domain/status.rs

use serde::Serialize;

/// Which movement sheet a record came from.
///
/// Declaration order is the scan order used by the resolver, and therefore
/// the precedence applied when two movements share the latest date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MovementKind {
    Delivery,
    Inbound,
    Return,
    Outbound,
}

impl MovementKind {
    pub const SCAN_ORDER: [MovementKind; 4] = [
        MovementKind::Delivery,
        MovementKind::Inbound,
        MovementKind::Return,
        MovementKind::Outbound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Delivery => "Delivery",
            MovementKind::Inbound => "Inbound",
            MovementKind::Return => "Return",
            MovementKind::Outbound => "Outbound",
        }
    }
}

/// Where a serial currently stands, derived from its latest movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLabel {
    Delivered,
    ShippedOut,
    /// Back in the warehouse, either received or returned.
    Available,
    NoRecords,
}

impl StatusLabel {
    /// Maps the kind of the latest movement to a status. `None` means the
    /// serial has no dated movement at all.
    pub fn from_latest(kind: Option<MovementKind>) -> Self {
        match kind {
            Some(MovementKind::Delivery) => StatusLabel::Delivered,
            Some(MovementKind::Outbound) => StatusLabel::ShippedOut,
            Some(MovementKind::Inbound) | Some(MovementKind::Return) => StatusLabel::Available,
            None => StatusLabel::NoRecords,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Delivered => "Delivered",
            StatusLabel::ShippedOut => "Shipped Out",
            StatusLabel::Available => "Available",
            StatusLabel::NoRecords => "No records",
        }
    }
}
