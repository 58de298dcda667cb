//! Boundary with the order-status backend.

pub mod http;
pub mod memory;

use crate::errors::ApiError;
use common::types::order_status::{OrderStatus, ReportedStatus};
use std::future::Future;
use std::pin::Pin;

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// Order-status backend as seen by the dashboard.
///
/// The returned futures own everything they need, so they can outlive the
/// call and be driven by an actor context.
pub trait OrderApi {
    /// Current status of `order_id`, or `None` when the backend does not know
    /// the order.
    fn fetch_status(&self, order_id: String) -> ApiFuture<Option<ReportedStatus>>;

    fn update_status(&self, order_id: String, status: OrderStatus) -> ApiFuture<()>;
}

pub use http::HttpOrderApi;
pub use memory::InMemoryOrderApi;
