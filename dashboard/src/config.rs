use clap::Parser;
use common::constants::{DEFAULT_API_URL, NOTICE_TTL, NOTICE_TTL_MILLIS};
use common::types::role::Role;
use std::time::Duration;

/// Terminal dashboard to look up and manage the status of orders.
#[derive(Debug, Parser)]
#[command(name = "order-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Role of the session: seller, admin, shopcart or customer. Without a
    /// known role only the search form is available.
    #[arg(long, env = "ORDER_DASHBOARD_ROLE")]
    pub role: Option<String>,

    /// Base URL of the order-status API.
    #[arg(long, env = "ORDER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds. No timeout when absent.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How long a success notice stays on screen, in milliseconds.
    #[arg(long, default_value_t = NOTICE_TTL_MILLIS)]
    pub notice_ttl_ms: u64,

    /// Use an in-memory backend seeded with demo orders.
    #[arg(long)]
    pub demo: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub role: Option<Role>,
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub notice_ttl: Duration,
    pub demo: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            role: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            notice_ttl: NOTICE_TTL,
            demo: false,
        }
    }
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        Self {
            role: cli.role.as_deref().and_then(Role::parse),
            api_url: cli.api_url,
            request_timeout: cli.timeout_secs.map(Duration::from_secs),
            notice_ttl: Duration::from_millis(cli.notice_ttl_ms),
            demo: cli.demo,
        }
    }
}
