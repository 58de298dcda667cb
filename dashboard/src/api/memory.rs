use crate::api::{ApiFuture, OrderApi};
use crate::errors::ApiError;
use common::constants::{DEMO_LATENCY_MILLIS, DEMO_SUCCESS_PROBABILITY};
use common::types::order_status::{OrderStatus, ReportedStatus};
use common::utils::random_bool_by_given_probability;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

/// Order-status backend kept in memory. Clones share the same orders, so a
/// test can keep a handle to inspect what the dashboard did.
#[derive(Debug, Clone)]
pub struct InMemoryOrderApi {
    orders: Arc<Mutex<HashMap<String, ReportedStatus>>>,
    calls: Arc<AtomicUsize>,
    /// When set, every request fails as if the backend were down.
    offline: Arc<AtomicBool>,
    success_probability: f32,
    latency: Duration,
}

impl Default for InMemoryOrderApi {
    fn default() -> Self {
        Self {
            orders: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            offline: Arc::new(AtomicBool::new(false)),
            success_probability: 1.0,
            latency: Duration::ZERO,
        }
    }
}

impl InMemoryOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend used by `--demo`: a few seeded orders, some latency and the
    /// occasional failure.
    pub fn demo() -> Self {
        Self::new()
            .with_order("ORD-1", OrderStatus::Packed)
            .with_order("ORD-2", OrderStatus::Processing)
            .with_order("ORD-3", OrderStatus::Shipped)
            .with_order("ORD-4", OrderStatus::Delivered)
            .with_order("ORD-5", OrderStatus::Cancelled)
            .with_order("ORD-6", ReportedStatus::from("Returned"))
            .with_latency(Duration::from_millis(DEMO_LATENCY_MILLIS))
            .with_success_probability(DEMO_SUCCESS_PROBABILITY)
    }

    pub fn with_order(self, order_id: &str, status: impl Into<ReportedStatus>) -> Self {
        if let Ok(mut orders) = self.orders.lock() {
            orders.insert(order_id.to_string(), status.into());
        }
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_success_probability(mut self, probability: f32) -> Self {
        self.success_probability = probability;
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn status_of(&self, order_id: &str) -> Option<ReportedStatus> {
        self.orders.lock().ok()?.get(order_id).cloned()
    }

    /// Registers a request and fails it when the backend is down.
    async fn round_trip(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("backend is offline".to_string()));
        }
        if !random_bool_by_given_probability(self.success_probability) {
            return Err(ApiError::Status {
                code: 503,
                body: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

fn poisoned() -> ApiError {
    ApiError::Unavailable("order table lock poisoned".to_string())
}

impl OrderApi for InMemoryOrderApi {
    fn fetch_status(&self, order_id: String) -> ApiFuture<Option<ReportedStatus>> {
        let api = self.clone();
        Box::pin(async move {
            api.round_trip().await?;
            let orders = api.orders.lock().map_err(|_| poisoned())?;
            Ok(orders.get(&order_id).cloned())
        })
    }

    fn update_status(&self, order_id: String, status: OrderStatus) -> ApiFuture<()> {
        let api = self.clone();
        Box::pin(async move {
            api.round_trip().await?;
            let mut orders = api.orders.lock().map_err(|_| poisoned())?;
            match orders.get_mut(&order_id) {
                Some(current) => {
                    *current = status.into();
                    Ok(())
                }
                None => Err(ApiError::Status {
                    code: 404,
                    body: format!("order {} not found", order_id),
                }),
            }
        })
    }
}
