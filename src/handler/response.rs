//! Response sink
//!
//! Handlers write their single JSON result here; the host converts it to an
//! HTTP response once the chain has finished.

use crate::config::ResponseConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::StatusCode;
use serde_json::Value;

/// Write-once output of a handler chain
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: Option<StatusCode>,
    body: Option<Value>,
    emissions: usize,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `payload` with `status`
    ///
    /// Only one emission is expected per request. A second one replaces the
    /// first and is reported as a warning.
    pub fn emit(&mut self, status: StatusCode, payload: Value) {
        if self.emissions > 0 {
            logger::log_warning(&format!(
                "Response already sent with {}, overwriting with {status}",
                self.status.unwrap_or(StatusCode::OK)
            ));
        }
        self.status = Some(status);
        self.body = Some(payload);
        self.emissions += 1;
    }

    /// Emit `payload` with 200 OK
    pub fn send(&mut self, payload: Value) {
        self.emit(StatusCode::OK, payload);
    }

    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Number of times `emit` was called
    pub const fn emissions(&self) -> usize {
        self.emissions
    }

    pub const fn is_sent(&self) -> bool {
        self.emissions > 0
    }

    /// Convert into a hyper response with a JSON body
    ///
    /// A response that was never emitted becomes 404 Not Found.
    pub fn into_http(self, config: &ResponseConfig) -> hyper::Response<Full<Bytes>> {
        let (status, body) = match (self.status, self.body) {
            (Some(status), Some(body)) => (status, body),
            _ => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": "Not Found" }),
            ),
        };

        let serialized = if config.pretty_json {
            serde_json::to_string_pretty(&body)
        } else {
            serde_json::to_string(&body)
        };

        let json = match serialized {
            Ok(j) => j,
            Err(e) => {
                logger::log_error(&format!("Failed to serialize response: {e}"));
                return internal_error(config);
            }
        };

        hyper::Response::builder()
            .status(status)
            .header("Content-Type", config.content_type.as_str())
            .body(Full::new(Bytes::from(json)))
            .unwrap_or_else(|e| {
                logger::log_error(&format!("Failed to build {status} response: {e}"));
                internal_error(config)
            })
    }
}

fn internal_error(config: &ResponseConfig) -> hyper::Response<Full<Bytes>> {
    hyper::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", config.content_type.as_str())
        .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        .unwrap_or_else(|_| hyper::Response::new(Full::new(Bytes::from("Error"))))
}
