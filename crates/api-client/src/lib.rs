// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Provider-neutral API client traits, errors and diagnostics
//!
//! This crate provides the abstractions shared by blockchain data API clients:
//!
//! - **`ApiClient` Trait**: common interface for health reporting and identification
//! - **Error Handling**: [`ApiError`] separates configuration problems, upstream
//!   rejections, malformed payloads and transport failures
//! - **Diagnostics**: [`RequestInfo`] and [`ResponseInfo`] describe the exchange
//!   that produced an error, without leaking credentials
//! - **Health Check System**: standardized [`HealthStatus`] reporting

use cardano_types::Network;
use thiserror::Error;

pub mod health;
pub mod types;

pub use health::*;
pub use types::*;

/// Result type alias for API client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Generic trait for blockchain data API clients
pub trait ApiClient: Send + Sync {
    /// Check the health of the upstream service
    ///
    /// Upstream rejections are reported as a [`HealthStatus`]; only failures to
    /// reach the service at all are returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the health endpoint cannot be reached
    fn health_check(&self) -> impl Future<Output = ApiResult<HealthStatus>> + Send;

    /// The network this client is bound to
    fn network(&self) -> Network;

    /// Get the name/identifier of this API client
    fn name(&self) -> &'static str;
}

/// Errors that can occur when talking to an upstream API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client configuration is invalid (for example an empty API key)
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },

    /// Upstream answered with a non-success status
    #[error(transparent)]
    Upstream(Box<UpstreamError>),

    /// Upstream answered with success but the body is not valid JSON
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Parser error description
        message: String,
        /// The offending response
        response: Box<ResponseInfo>,
    },

    /// Transport failure (DNS, connection, timeout), passed through unchanged
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The upstream rejection, if this is one
    pub fn as_upstream(&self) -> Option<&UpstreamError> {
        match self {
            Self::Upstream(error) => Some(error),
            _ => None,
        }
    }

    /// HTTP status of the response that caused this error, when there was one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream(error) => Some(error.status_code),
            Self::MalformedResponse { response, .. } => Some(response.status),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::Configuration { .. } => None,
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(error: UpstreamError) -> Self {
        Self::Upstream(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;
    use url::Url;

    use super::*;

    fn sample_response(status: u16, body: &str) -> ResponseInfo {
        ResponseInfo {
            status,
            url: Url::parse("https://cardano-mainnet.blockfrost.io/api/v0/blocks/latest")
                .unwrap(),
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn configuration_error_display() {
        let error = ApiError::configuration("API key cannot be empty");
        assert_eq!(
            error.to_string(),
            "Configuration error: API key cannot be empty"
        );
        assert!(error.status_code().is_none());
        assert!(error.as_upstream().is_none());
    }

    #[test]
    fn upstream_error_conversion() {
        let response = sample_response(404, r#"{"status_code":404,"message":"Not Found"}"#);
        let upstream = UpstreamError {
            status_code: 404,
            code: 404,
            message: "Not Found".to_string(),
            request: RequestInfo::get(response.url.clone()),
            response,
        };

        let error = ApiError::from(upstream);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.as_upstream().map(|e| e.code), Some(404));
        assert_eq!(error.to_string(), "API error (status 404, code 404): Not Found");
    }

    #[test]
    fn malformed_response_reports_status() {
        let error = ApiError::MalformedResponse {
            message: "expected value at line 1 column 1".to_string(),
            response: Box::new(sample_response(200, "<html>")),
        };
        assert_eq!(error.status_code(), Some(200));
        assert!(error.to_string().starts_with("Malformed response"));
    }
}
