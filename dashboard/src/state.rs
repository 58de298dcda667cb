//! Dashboard UI state as an explicit state machine.
//!
//! ```text
//! Idle -> Searching -> {Found, NotFound, Error}
//! Found -> Updating -> {Found(new status), Error}
//! ```
//!
//! `begin_*` methods validate a user action and move into the pending phase;
//! the matching `*_succeeded`/`*_failed` methods apply the outcome of the
//! request. Nothing here performs I/O.

use crate::errors::DashboardError;
use common::types::order_status::{OrderStatus, ReportedStatus};
use common::types::role::{Role, can_manage_order};
use common::views::OrderView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    Found,
    NotFound,
    Error,
    Updating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub role: Option<Role>,
    pub phase: Phase,
    /// Order whose status is on screen.
    pub order_id: Option<String>,
    pub status: Option<ReportedStatus>,
    pub found: bool,
    pub error: Option<DashboardError>,
    pub success: Option<String>,
    pending_search: Option<String>,
    pending_update: Option<OrderStatus>,
}

impl DashboardState {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role,
            phase: Phase::Idle,
            order_id: None,
            status: None,
            found: false,
            error: None,
            success: None,
            pending_search: None,
            pending_update: None,
        }
    }

    /// A request is outstanding; search and update triggers are disabled.
    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Searching | Phase::Updating)
    }

    pub fn can_manage(&self) -> bool {
        can_manage_order(self.role)
    }

    /// Starts a lookup. Returns the normalized order id to request.
    pub fn begin_search(&mut self, input: &str) -> Result<String, DashboardError> {
        if self.loading() {
            return Err(DashboardError::RequestInFlight);
        }
        let Some(order_id) = common::utils::normalize_order_id(input) else {
            self.error = Some(DashboardError::EmptyOrderId);
            return Err(DashboardError::EmptyOrderId);
        };

        self.phase = Phase::Searching;
        self.error = None;
        self.success = None;
        self.pending_search = Some(order_id.clone());
        Ok(order_id)
    }

    /// Applies a completed lookup. `None` means the backend does not know the
    /// order.
    pub fn search_succeeded(&mut self, status: Option<ReportedStatus>) {
        let order_id = self.pending_search.take();
        match status {
            Some(status) => {
                self.phase = Phase::Found;
                self.found = true;
                self.order_id = order_id;
                self.status = Some(status);
                self.error = None;
            }
            None => {
                self.phase = Phase::NotFound;
                self.clear_order();
                self.error = Some(DashboardError::NotFound);
            }
        }
    }

    pub fn search_failed(&mut self) {
        self.pending_search = None;
        self.phase = Phase::Error;
        self.clear_order();
        self.error = Some(DashboardError::SearchFailed);
    }

    /// Starts a status change of the order on screen. Returns the order id and
    /// status to send.
    pub fn begin_update(
        &mut self,
        status: OrderStatus,
    ) -> Result<(String, OrderStatus), DashboardError> {
        if self.loading() {
            return Err(DashboardError::RequestInFlight);
        }
        let checked = match (&self.order_id, self.found) {
            (Some(_), true) if !self.can_manage() => Err(DashboardError::NotAllowed),
            (Some(order_id), true) => Ok(order_id.clone()),
            _ => Err(DashboardError::NoOrderSelected),
        };
        let order_id = checked.inspect_err(|e| self.error = Some(e.clone()))?;

        self.phase = Phase::Updating;
        self.error = None;
        self.success = None;
        self.pending_update = Some(status);
        Ok((order_id, status))
    }

    /// Applies an accepted update. The new status is shown right away, no
    /// refetch. Returns the success notice.
    pub fn update_succeeded(&mut self) -> Option<String> {
        let status = self.pending_update.take()?;
        self.phase = Phase::Found;
        self.status = Some(status.into());
        self.error = None;
        let notice = format!("Order status updated to {}.", status);
        self.success = Some(notice.clone());
        Some(notice)
    }

    /// Keeps the previous status on screen.
    pub fn update_failed(&mut self) {
        self.pending_update = None;
        self.phase = Phase::Error;
        self.error = Some(DashboardError::UpdateFailed);
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    /// Order view for the session role, if an order is on screen and the
    /// role may see it.
    pub fn view(&self) -> Option<OrderView> {
        if !self.found {
            return None;
        }
        let status = self.status.as_ref()?;
        OrderView::for_role(self.role, status, self.loading())
    }

    fn clear_order(&mut self) {
        self.found = false;
        self.order_id = None;
        self.status = None;
    }
}
