use crate::api::{ApiFuture, OrderApi};
use crate::config::DashboardConfig;
use crate::errors::ApiError;
use colored::Color;
use common::constants::{ORDERS_SEGMENT, REQUEST_ID_HEADER, STATUS_SEGMENT};
use common::logger::Logger;
use common::types::dtos::{OrderStatusDTO, UpdateOrderStatusDTO};
use common::types::order_status::{OrderStatus, ReportedStatus};
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use uuid::Uuid;

/// REST client for the order-status backend.
///
/// - `GET {api_url}/orders/{id}/status` answers `{ "orderStatus": ... }` or 404.
/// - `PATCH {api_url}/orders/{id}/status` takes `{ "orderStatus": ... }`.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: Client,
    base_url: Url,
    logger: Logger,
}

impl HttpOrderApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| ApiError::InvalidUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.api_url.clone(),
                reason: "not usable as a base url".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            logger: Logger::new("OrderApi", Color::BrightBlue),
        })
    }

    pub fn status_url(&self, order_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([ORDERS_SEGMENT, order_id, STATUS_SEGMENT]);
        }
        url
    }
}

const ORDER_STATUS_FIELD: &str = "orderStatus";

/// `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Reads a status lookup body. An empty or falsy body, and an object whose
/// `orderStatus` is missing or falsy, all mean "not found".
pub fn parse_status_body(body: &str) -> Result<Option<ReportedStatus>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Value>(body)? {
        value if is_falsy(&value) => Ok(None),
        Value::Object(fields) => {
            if fields.get(ORDER_STATUS_FIELD).is_none_or(is_falsy) {
                return Ok(None);
            }
            let dto: OrderStatusDTO = serde_json::from_value(Value::Object(fields))?;
            Ok(dto.reported_status())
        }
        other => Err(ApiError::Unavailable(format!(
            "unexpected status body: {}",
            other
        ))),
    }
}

async fn error_for_status(response: Response) -> ApiError {
    let code = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status { code, body }
}

impl OrderApi for HttpOrderApi {
    fn fetch_status(&self, order_id: String) -> ApiFuture<Option<ReportedStatus>> {
        let client = self.client.clone();
        let url = self.status_url(&order_id);
        let logger = self.logger.clone();
        let request_id = Uuid::new_v4().to_string();

        Box::pin(async move {
            logger.info(format!("GET {} [{}]", url, request_id));
            let response = client
                .get(url)
                .header(REQUEST_ID_HEADER, request_id.as_str())
                .send()
                .await?;

            match response.status() {
                StatusCode::NOT_FOUND => Ok(None),
                status if status.is_success() => {
                    let body = response.text().await?;
                    parse_status_body(&body)
                }
                _ => {
                    let err = error_for_status(response).await;
                    logger.error(format!(
                        "Status lookup [{}] failed: {}",
                        request_id, err
                    ));
                    Err(err)
                }
            }
        })
    }

    fn update_status(&self, order_id: String, status: OrderStatus) -> ApiFuture<()> {
        let client = self.client.clone();
        let url = self.status_url(&order_id);
        let logger = self.logger.clone();
        let request_id = Uuid::new_v4().to_string();

        Box::pin(async move {
            logger.info(format!("PATCH {} -> {} [{}]", url, status, request_id));
            let response = client
                .patch(url)
                .header(REQUEST_ID_HEADER, request_id.as_str())
                .json(&UpdateOrderStatusDTO {
                    order_status: status,
                })
                .send()
                .await?;

            if response.status().is_success() {
                Ok(())
            } else {
                let err = error_for_status(response).await;
                logger.error(format!(
                    "Status update [{}] failed: {}",
                    request_id, err
                ));
                Err(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn api(url: &str) -> Result<HttpOrderApi, ApiError> {
        HttpOrderApi::new(&DashboardConfig {
            api_url: url.to_string(),
            ..DashboardConfig::default()
        })
    }

    /// Reads one HTTP/1.1 request, headers and body.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    /// Answers a single request with `status` and `body`. The handle yields
    /// the raw request that was received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (url, handle)
    }

    fn header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
        request
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
    }

    #[test]
    fn test_status_url_appends_segments() {
        let api = api("http://localhost:8080/api/").unwrap();
        assert_eq!(
            api.status_url("ORD-1").as_str(),
            "http://localhost:8080/api/orders/ORD-1/status"
        );
    }

    #[test]
    fn test_status_url_escapes_order_id() {
        let api = api("http://localhost:8080/api").unwrap();
        assert_eq!(
            api.status_url("a/b c").as_str(),
            "http://localhost:8080/api/orders/a%2Fb%20c/status"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(api("not a url"), Err(ApiError::InvalidUrl { .. })));
        assert!(matches!(
            api("mailto:shop@example.com"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_found_body() {
        assert_eq!(
            parse_status_body(r#"{"orderStatus":"Packed"}"#).unwrap(),
            Some(ReportedStatus::Known(OrderStatus::Packed))
        );
    }

    #[test]
    fn test_parse_falsy_bodies() {
        let bodies = [
            "",
            "  ",
            "null",
            "false",
            "0",
            "0.0",
            r#""""#,
            "{}",
            r#"{"orderStatus":""}"#,
            r#"{"orderStatus":null}"#,
            r#"{"orderStatus":false}"#,
            r#"{"orderStatus":0}"#,
        ];
        for body in bodies {
            assert_eq!(parse_status_body(body).unwrap(), None, "body: {:?}", body);
        }
    }

    #[test]
    fn test_parse_garbage_body_fails() {
        assert!(matches!(
            parse_status_body("<html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(parse_status_body("[1, 2]").is_err());
        assert!(parse_status_body(r#"{"orderStatus":7}"#).is_err());
    }

    #[actix_rt::test]
    async fn test_fetch_sends_get_with_request_id() {
        let (url, server) = serve_once("200 OK", r#"{"orderStatus":"Shipped"}"#).await;

        let status = api(&url).unwrap().fetch_status("ORD-1".to_string()).await;
        assert_eq!(status.unwrap(), Some(OrderStatus::Shipped.into()));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/orders/ORD-1/status HTTP/1.1\r\n"));
        let request_id = header(&request, REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(request_id).is_ok());
    }

    #[actix_rt::test]
    async fn test_fetch_not_found_is_none() {
        let (url, server) = serve_once("404 Not Found", "").await;

        let status = api(&url).unwrap().fetch_status("ORD-404".to_string()).await;
        assert_eq!(status.unwrap(), None);
        server.await.unwrap();
    }

    #[actix_rt::test]
    async fn test_fetch_server_error_keeps_code_and_body() {
        let (url, server) = serve_once("500 Internal Server Error", "boom").await;

        let result = api(&url).unwrap().fetch_status("ORD-1".to_string()).await;
        let Err(ApiError::Status { code, body }) = &result else {
            panic!("Expected a status error, got {:?}", result);
        };
        assert_eq!(*code, 500);
        assert_eq!(body, "boom");
        server.await.unwrap();
    }

    #[actix_rt::test]
    async fn test_update_sends_patch_with_camel_case_body() {
        let (url, server) = serve_once("200 OK", "").await;

        api(&url)
            .unwrap()
            .update_status("ORD-1".to_string(), OrderStatus::Delivered)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("PATCH /api/orders/ORD-1/status HTTP/1.1\r\n"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        let request_id = header(&request, REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(request_id).is_ok());
        assert!(request.ends_with(r#"{"orderStatus":"Delivered"}"#));
    }

    #[actix_rt::test]
    async fn test_update_rejected_by_backend() {
        let (url, server) = serve_once("409 Conflict", "order is closed").await;

        let result = api(&url)
            .unwrap()
            .update_status("ORD-9".to_string(), OrderStatus::Shipped)
            .await;
        assert!(matches!(result, Err(ApiError::Status { code: 409, .. })));
        server.await.unwrap();
    }
}
