//! Text rendering of the dashboard for a terminal.

use crate::state::{DashboardState, Phase};
use colored::*;
use common::indicator::{ProgressView, StepView};
use common::views::{CustomerView, OrderView, SellerView};

const BAR_WIDTH: usize = 24;

pub fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        (fraction * 100.0).round() as u32
    )
}

fn step(step: &StepView) -> String {
    let text = format!("{} {}", step.record.icon, step.record.label);
    if step.current {
        text.bold().underline().color(step.record.color).to_string()
    } else if step.active {
        text.color(step.record.color).to_string()
    } else {
        text.dimmed().to_string()
    }
}

pub fn render_progress(progress: &ProgressView) -> String {
    match progress {
        ProgressView::Cancelled { record, message } => format!(
            "{}\n{}",
            format!("{} {}", record.icon, record.label.to_uppercase())
                .bold()
                .color(record.color),
            message
        ),
        ProgressView::Linear {
            fraction, steps, ..
        } => {
            let steps: Vec<String> = steps.iter().map(step).collect();
            format!("{}\n{}", progress_bar(*fraction), steps.join(" → "))
        }
    }
}

fn render_customer(view: &CustomerView) -> String {
    format!(
        "Status: {}\n{}\n{}",
        view.status.to_string().bold(),
        render_progress(&view.progress),
        view.message.italic()
    )
}

fn render_seller(view: &SellerView) -> String {
    let actions: Vec<String> = view
        .actions
        .iter()
        .map(|action| {
            let label = format!("[{}]", action.record.label);
            if action.disabled {
                label.dimmed().strikethrough().to_string()
            } else {
                label.color(action.record.color).to_string()
            }
        })
        .collect();

    format!(
        "Status: {}\n{}\nActions (set <status>): {}\n{}\n{}",
        view.status.to_string().bold(),
        render_progress(&view.progress),
        actions.join(" "),
        "--- Customer preview ---".dimmed(),
        render_customer(&view.customer_preview)
    )
}

pub fn render_dashboard(state: &DashboardState) -> String {
    let mut lines = Vec::new();

    let role = state
        .role
        .map(|role| role.to_string())
        .unwrap_or_else(|| "not signed in".to_string());
    let mut header = format!("== Order dashboard ({}) ==", role).bold().to_string();
    match state.phase {
        Phase::Searching => header.push_str(&" searching...".yellow().to_string()),
        Phase::Updating => header.push_str(&" updating...".yellow().to_string()),
        _ => {}
    }
    lines.push(header);

    if let Some(error) = &state.error {
        lines.push(format!("✖ {}", error).bright_red().to_string());
    }
    if let Some(success) = &state.success {
        lines.push(format!("✔ {}", success).green().to_string());
    }

    if let (true, Some(order_id)) = (state.found, &state.order_id) {
        lines.push(format!("Order {}", order_id));
        match state.view() {
            Some(OrderView::Seller(view)) => lines.push(render_seller(&view)),
            Some(OrderView::Customer(view)) => lines.push(render_customer(&view)),
            None => lines.push("Sign in to see the status of this order.".to_string()),
        }
    }

    lines.join("\n")
}
