//! Error types for the gateway.
//!
//! One error enum covers the whole HTTP surface. Client input problems
//! fail fast before any upstream call; upstream failures are wrapped in
//! a structured body that names the failing integration and preserves
//! both the upstream status code and its body. Every error logs once,
//! where it is rendered. Nothing is retried and nothing is swallowed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by gateway handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// A required query parameter was absent or empty.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// The parameter name.
        name: &'static str,
    },

    /// A parameter was present but outside its documented range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The upstream service answered with a non-2xx status.
    #[error("{service} returned status {status}")]
    Upstream {
        /// Short name of the failing integration.
        service: &'static str,
        /// The upstream HTTP status code.
        status: u16,
        /// The upstream body, preserved for the caller's diagnosis.
        body: String,
    },

    /// The outbound request failed before a response arrived.
    #[error("{service} request failed: {message}")]
    UpstreamRequest {
        /// Short name of the failing integration.
        service: &'static str,
        /// Transport-level error description.
        message: String,
    },

    /// The upstream did not answer within the configured bound.
    #[error("{service} did not respond within the timeout")]
    UpstreamTimeout {
        /// Short name of the failing integration.
        service: &'static str,
    },

    /// The endpoint is a deliberate stub.
    #[error("{what} is not implemented")]
    NotImplemented {
        /// What is missing.
        what: &'static str,
    },
}

impl GatewayError {
    /// HTTP status code for this error.
    ///
    /// - Missing/invalid parameter: 400 Bad Request
    /// - Upstream non-2xx: the upstream's own status, preserved
    /// - Upstream transport failure: 502 Bad Gateway
    /// - Upstream timeout: 504 Gateway Timeout
    /// - Stubbed endpoint: 501 Not Implemented
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            },
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            },
            Self::UpstreamRequest { .. } => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{self}");
        } else {
            warn!(status = status.as_u16(), "{self}");
        }

        let mut body = json!({ "error": self.to_string() });

        match &self {
            Self::Upstream {
                service,
                status,
                body: upstream_body,
            } => {
                body["service"] = json!(service);
                body["upstream_status"] = json!(status);
                // Relay the upstream's diagnostic payload; JSON when it
                // parses, the raw text otherwise.
                body["upstream_body"] = serde_json::from_str(upstream_body)
                    .unwrap_or_else(|_| json!(upstream_body));
            },
            Self::UpstreamRequest { service, .. } | Self::UpstreamTimeout { service } => {
                body["service"] = json!(service);
            },
            _ => {},
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            GatewayError::MissingParameter { name: "lat" }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidParameter {
                name: "angle_deg",
                reason: "out of range".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn upstream_status_is_preserved() {
        let err = GatewayError::Upstream {
            service: "neows-browse",
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = GatewayError::Upstream {
            service: "neows-browse",
            status: 429,
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn unrepresentable_upstream_status_falls_back_to_502() {
        let err = GatewayError::Upstream {
            service: "jpl-sbdb",
            status: 42,
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn infrastructure_errors_have_fixed_codes() {
        assert_eq!(
            GatewayError::UpstreamRequest {
                service: "epqs-elevation",
                message: "connection refused".to_string()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::UpstreamTimeout {
                service: "usgs-earthquakes"
            }
            .status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            GatewayError::NotImplemented { what: "astronomy" }.status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[tokio::test]
    async fn upstream_body_survives_into_the_response() {
        use http_body_util::BodyExt;

        let err = GatewayError::Upstream {
            service: "neows-lookup",
            status: 404,
            body: r#"{"message": "no such asteroid"}"#.to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value["upstream_body"],
            serde_json::json!({ "message": "no such asteroid" })
        );
    }

    #[tokio::test]
    async fn non_json_upstream_body_is_relayed_as_text() {
        use http_body_util::BodyExt;

        let err = GatewayError::Upstream {
            service: "epqs-elevation",
            status: 500,
            body: "Invalid or missing input parameters.".to_string(),
        };
        let bytes = err
            .into_response()
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value["upstream_body"],
            serde_json::json!("Invalid or missing input parameters.")
        );
    }

    #[test]
    fn every_error_renders_with_a_log_line() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

        impl Write for CaptureWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Arc::new(Mutex::new(Vec::new()));
        let writer = CaptureWriter(Arc::clone(&captured));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = GatewayError::MissingParameter { name: "lat" }.into_response();
            let _ = GatewayError::UpstreamTimeout {
                service: "usgs-earthquakes",
            }
            .into_response();
        });

        let logs = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("missing required parameter: lat"));
        // Timeouts are server-side failures and log at error level.
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("usgs-earthquakes did not respond within the timeout"));
    }
}
