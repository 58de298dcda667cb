use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of an order as the backend stores it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Processing, // Set on placement
    Packed,
    Shipped,
    Delivered,
    Cancelled, // Terminal, reachable from any other status
}

impl OrderStatus {
    /// Every status, linear ones first.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Processing,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Packed => "Packed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status as reported by the backend. Values this client does not know are
/// kept as they came so they can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportedStatus {
    Known(OrderStatus),
    Unrecognized(String),
}

impl ReportedStatus {
    pub fn known(&self) -> Option<OrderStatus> {
        match self {
            ReportedStatus::Known(status) => Some(*status),
            ReportedStatus::Unrecognized(_) => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.known().is_some_and(|status| status.is_cancelled())
    }

    pub fn is(&self, status: OrderStatus) -> bool {
        self.known() == Some(status)
    }
}

impl From<OrderStatus> for ReportedStatus {
    fn from(status: OrderStatus) -> Self {
        ReportedStatus::Known(status)
    }
}

impl From<&str> for ReportedStatus {
    fn from(raw: &str) -> Self {
        match raw.parse::<OrderStatus>() {
            Ok(status) => ReportedStatus::Known(status),
            Err(_) => ReportedStatus::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for ReportedStatus {
    fn from(raw: String) -> Self {
        ReportedStatus::from(raw.as_str())
    }
}

impl From<ReportedStatus> for String {
    fn from(status: ReportedStatus) -> Self {
        match status {
            ReportedStatus::Known(status) => status.as_str().to_string(),
            ReportedStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportedStatus::Known(status) => write!(f, "{}", status),
            ReportedStatus::Unrecognized(raw) => write!(f, "{} (unrecognized)", raw),
        }
    }
}
