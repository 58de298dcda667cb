//! Progress indicator of an order.
//!
//! [`render`] is a pure function of the current status: it builds a
//! [`ProgressView`] that a frontend turns into whatever it draws. Active and
//! current flags only change the visual weight of a step.

use crate::catalog::{self, CANCELLED_STATUS, LINEAR_STATUSES, StatusRecord};
use crate::types::order_status::ReportedStatus;

pub const CANCELLED_MESSAGE: &str = "This order has been cancelled.";

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub record: StatusRecord,
    /// Reached already (or being the current one).
    pub active: bool,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressView {
    /// Terminal badge. Never carries steps nor a progress bar.
    Cancelled {
        record: StatusRecord,
        message: &'static str,
    },
    Linear {
        /// In `[0, 1]`.
        fraction: f64,
        /// `None` when the status is not one of the linear statuses.
        current_index: Option<usize>,
        steps: Vec<StepView>,
        interactive: bool,
    },
}

impl ProgressView {
    pub fn fraction(&self) -> Option<f64> {
        match self {
            ProgressView::Cancelled { .. } => None,
            ProgressView::Linear { fraction, .. } => Some(*fraction),
        }
    }

    pub fn steps(&self) -> &[StepView] {
        match self {
            ProgressView::Cancelled { .. } => &[],
            ProgressView::Linear { steps, .. } => steps,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProgressView::Cancelled { .. })
    }
}

/// Progress fraction for a linear position. Unrecognized statuses have no
/// position and get `0.0`.
pub fn progress_fraction(current_index: Option<usize>) -> f64 {
    let last = catalog::linear_len().saturating_sub(1);
    match current_index {
        Some(index) if last > 0 => (index as f64 / last as f64).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

pub fn render(current_status: &ReportedStatus, read_only: bool) -> ProgressView {
    if current_status.is_cancelled() {
        return ProgressView::Cancelled {
            record: CANCELLED_STATUS,
            message: CANCELLED_MESSAGE,
        };
    }

    let current_index = catalog::index_of(current_status);
    let steps = LINEAR_STATUSES
        .iter()
        .enumerate()
        .map(|(i, record)| StepView {
            record: *record,
            active: current_index.is_some_and(|current| i <= current),
            current: current_index == Some(i),
        })
        .collect();

    ProgressView::Linear {
        fraction: progress_fraction(current_index),
        current_index,
        steps,
        interactive: !read_only,
    }
}
