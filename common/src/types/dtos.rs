use crate::types::order_status::{OrderStatus, ReportedStatus};
use serde::{Deserialize, Serialize};

/// Body of the status lookup response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusDTO {
    /// Current status. `null`, missing or empty means the order was not found.
    #[serde(default)]
    pub order_status: Option<String>,
}

impl OrderStatusDTO {
    pub fn reported_status(&self) -> Option<ReportedStatus> {
        self.order_status
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(ReportedStatus::from)
    }
}

/// Body of the status update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDTO {
    pub order_status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_status_body() {
        let dto: OrderStatusDTO = serde_json::from_str(r#"{"orderStatus":"Packed"}"#).unwrap();
        assert_eq!(
            dto.reported_status(),
            Some(ReportedStatus::Known(OrderStatus::Packed))
        );
    }

    #[test]
    fn test_falsy_bodies_mean_not_found() {
        for body in [r#"{}"#, r#"{"orderStatus":null}"#, r#"{"orderStatus":""}"#] {
            let dto: OrderStatusDTO = serde_json::from_str(body).unwrap();
            assert_eq!(dto.reported_status(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_update_body_uses_camel_case() {
        let dto = UpdateOrderStatusDTO {
            order_status: OrderStatus::Shipped,
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"orderStatus":"Shipped"}"#
        );
    }
}
