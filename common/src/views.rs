//! Role-scoped order views built on top of the progress indicator.

use crate::catalog::{self, StatusRecord};
use crate::indicator::{self, ProgressView};
use crate::types::order_status::{OrderStatus, ReportedStatus};
use crate::types::role::{Role, can_manage_order};

/// One button of the seller's action surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusAction {
    pub record: StatusRecord,
    pub disabled: bool,
}

/// What a customer sees. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerView {
    pub status: ReportedStatus,
    pub progress: ProgressView,
    pub message: &'static str,
}

/// What a seller sees: interactive progress, the action surface and a preview
/// of the customer's view of the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerView {
    pub status: ReportedStatus,
    pub progress: ProgressView,
    pub actions: Vec<StatusAction>,
    pub customer_preview: CustomerView,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderView {
    Seller(SellerView),
    Customer(CustomerView),
}

pub fn customer_message(status: &ReportedStatus) -> &'static str {
    match status.known() {
        Some(OrderStatus::Processing) => "We have received your order and are processing it.",
        Some(OrderStatus::Packed) => "Your order is packed and will ship soon.",
        Some(OrderStatus::Shipped) => "Your order is on its way!",
        Some(OrderStatus::Delivered) => "Your order has been delivered. Enjoy your pottery!",
        Some(OrderStatus::Cancelled) => {
            "Your order was cancelled. Contact the seller if you have questions."
        }
        None => "We could not determine the status of your order.",
    }
}

impl CustomerView {
    pub fn new(status: &ReportedStatus) -> Self {
        Self {
            status: status.clone(),
            progress: indicator::render(status, true),
            message: customer_message(status),
        }
    }
}

impl SellerView {
    pub fn new(status: &ReportedStatus, loading: bool) -> Self {
        let actions = OrderStatus::ALL
            .into_iter()
            .map(|value| StatusAction {
                record: *catalog::record_of(value),
                disabled: loading || status.is(value),
            })
            .collect();

        Self {
            status: status.clone(),
            progress: indicator::render(status, false),
            actions,
            customer_preview: CustomerView::new(status),
            loading,
        }
    }

    pub fn action(&self, status: OrderStatus) -> Option<&StatusAction> {
        self.actions
            .iter()
            .find(|action| action.record.value == status)
    }

    /// Presses the button for `status`. Calls `on_status_update` only when the
    /// button is enabled, and returns whether it was called.
    pub fn press<F>(&self, status: OrderStatus, on_status_update: F) -> bool
    where
        F: FnOnce(OrderStatus),
    {
        match self.action(status) {
            Some(action) if !action.disabled => {
                on_status_update(status);
                true
            }
            _ => false,
        }
    }
}

impl OrderView {
    /// View for `role`. Sessions without a role get no order view at all.
    pub fn for_role(role: Option<Role>, status: &ReportedStatus, loading: bool) -> Option<Self> {
        match role {
            None => None,
            Some(_) if can_manage_order(role) => {
                Some(OrderView::Seller(SellerView::new(status, loading)))
            }
            Some(_) => Some(OrderView::Customer(CustomerView::new(status))),
        }
    }
}
