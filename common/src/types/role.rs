use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the user acting on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Seller,
    Admin,
    /// Storefront operator account.
    Shopcart,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seller => "Seller",
            Role::Admin => "Admin",
            Role::Shopcart => "Shopcart",
            Role::Customer => "Customer",
        }
    }

    /// Parses a session role. Unknown or blank roles map to `None`, which is
    /// treated like an unauthenticated session.
    pub fn parse(raw: &str) -> Option<Role> {
        raw.parse().ok()
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            "shopcart" => Ok(Role::Shopcart),
            "customer" => Ok(Role::Customer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `role` may change the status of an order.
pub fn can_manage_order(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Seller | Role::Admin | Role::Shopcart))
}
