use thiserror::Error;

/// Failures at the boundary with the order-status backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Problems shown to the user. The messages are final copy; transport
/// details never reach them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Please enter an order ID.")]
    EmptyOrderId,

    #[error("No order selected. Search for an order first.")]
    NoOrderSelected,

    #[error("You are not allowed to update orders.")]
    NotAllowed,

    #[error("A request is already in progress. Please wait.")]
    RequestInFlight,

    #[error("Order not found.")]
    NotFound,

    #[error("Could not fetch the order status. Please try again.")]
    SearchFailed,

    #[error("Could not update the order status. Please try again.")]
    UpdateFailed,
}
