//! Fixed catalog of order statuses and how each one is presented.

use crate::types::order_status::{OrderStatus, ReportedStatus};
use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRecord {
    pub value: OrderStatus,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

/// Linear statuses in progress order. `Cancelled` is not part of it.
pub static LINEAR_STATUSES: [StatusRecord; 4] = [
    StatusRecord {
        value: OrderStatus::Processing,
        label: "Processing",
        icon: "⏳",
        color: Color::Blue,
    },
    StatusRecord {
        value: OrderStatus::Packed,
        label: "Packed",
        icon: "📦",
        color: Color::Magenta,
    },
    StatusRecord {
        value: OrderStatus::Shipped,
        label: "Shipped",
        icon: "🚚",
        color: Color::Yellow,
    },
    StatusRecord {
        value: OrderStatus::Delivered,
        label: "Delivered",
        icon: "✅",
        color: Color::Green,
    },
];

pub static CANCELLED_STATUS: StatusRecord = StatusRecord {
    value: OrderStatus::Cancelled,
    label: "Cancelled",
    icon: "✖",
    color: Color::Red,
};

pub fn linear_len() -> usize {
    LINEAR_STATUSES.len()
}

/// Position of `status` in the linear sequence. `None` for `Cancelled` and for
/// statuses this client does not recognize.
pub fn index_of(status: &ReportedStatus) -> Option<usize> {
    let status = status.known()?;
    LINEAR_STATUSES
        .iter()
        .position(|record| record.value == status)
}

pub fn record_of(status: OrderStatus) -> &'static StatusRecord {
    LINEAR_STATUSES
        .iter()
        .find(|record| record.value == status)
        .unwrap_or(&CANCELLED_STATUS)
}
