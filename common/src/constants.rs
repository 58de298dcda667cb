use std::time::Duration;

pub const NOTICE_TTL_MILLIS: u64 = 3000;
pub const NOTICE_TTL: Duration = Duration::from_millis(NOTICE_TTL_MILLIS);

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Path segments of the status resource of an order: `orders/{order_id}/status`.
pub const ORDERS_SEGMENT: &str = "orders";
pub const STATUS_SEGMENT: &str = "status";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Probability that the demo API answers a request successfully.
pub const DEMO_SUCCESS_PROBABILITY: f32 = 0.9;
pub const DEMO_LATENCY_MILLIS: u64 = 400;
