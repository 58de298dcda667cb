use crate::errors::DashboardError;
use crate::state::DashboardState;
use actix::prelude::*;
use common::types::order_status::{OrderStatus, ReportedStatus};

/// Looks up the status of an order. `order_id` is raw user input.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<ReportedStatus, DashboardError>")]
pub struct SearchOrder {
    pub order_id: String,
}

/// Moves the order on screen to `status`.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<OrderStatus, DashboardError>")]
pub struct UpdateStatus {
    pub status: OrderStatus,
}

/// Returns a copy of the current dashboard state.
#[derive(Message, Debug, Clone)]
#[rtype(result = "DashboardState")]
pub struct GetSnapshot;

/// Published after every state transition.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct DashboardChanged {
    pub state: DashboardState,
}

/// Registers the recipient of [`DashboardChanged`].
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<DashboardChanged>);
