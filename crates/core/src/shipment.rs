//! Shipment lifecycle derived from a logistics record's end time.

use serde::Serialize;

use crate::types::Timestamp;

/// A shipment is in transit until receipt is confirmed, which stamps its
/// end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn from_end_time(end_time: Option<Timestamp>) -> Self {
        match end_time {
            Some(_) => Self::Delivered,
            None => Self::InTransit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
