// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request and response descriptors attached to errors for diagnostics

use std::fmt;

use reqwest::header::HeaderMap;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// The request that produced a response
///
/// Only the method and target are recorded; authentication headers are
/// never captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    /// HTTP method
    pub method: String,
    /// Full request URL including the query string
    pub url: Url,
}

impl RequestInfo {
    /// Describe a GET request to `url`
    pub fn get(url: Url) -> Self {
        Self {
            method: "GET".to_string(),
            url,
        }
    }
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// HTTP status code
    pub status: u16,
    /// Final URL after redirects
    pub url: Url,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: String,
}

/// A non-success answer from the upstream API
#[derive(Debug, Clone, Error)]
#[error("API error (status {status_code}, code {code}): {message}")]
pub struct UpstreamError {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Error code reported in the upstream error body, 0 when absent
    pub code: i64,
    /// Error message reported upstream, or a fallback quoting the raw body
    pub message: String,
    /// The originating request
    pub request: RequestInfo,
    /// The full response
    pub response: ResponseInfo,
}

impl UpstreamError {
    /// Whether upstream rejected the credentials (401/403)
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status_code, 401 | 403)
    }

    /// Whether upstream reported a missing resource
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// Whether upstream reported rate limiting or a banned key (429/418)
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.status_code, 418 | 429)
    }

    /// Whether upstream failed on its side (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status_code: u16) -> UpstreamError {
        let url = Url::parse("https://cardano-testnet.blockfrost.io/api/v0/epochs/latest")
            .unwrap();
        UpstreamError {
            status_code,
            code: i64::from(status_code),
            message: "error".to_string(),
            request: RequestInfo::get(url.clone()),
            response: ResponseInfo {
                status: status_code,
                url,
                headers: HeaderMap::new(),
                body: String::new(),
            },
        }
    }

    #[test]
    fn request_info_display() {
        let url = Url::parse("https://cardano-mainnet.blockfrost.io/api/v0/genesis?a=1").unwrap();
        let request = RequestInfo::get(url);
        assert_eq!(
            request.to_string(),
            "GET https://cardano-mainnet.blockfrost.io/api/v0/genesis?a=1"
        );
    }

    #[test]
    fn request_info_serializes_without_headers() {
        let url = Url::parse("https://cardano-mainnet.blockfrost.io/api/v0/genesis").unwrap();
        let json = serde_json::to_value(RequestInfo::get(url)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "method": "GET",
                "url": "https://cardano-mainnet.blockfrost.io/api/v0/genesis"
            })
        );
    }

    #[test]
    fn status_classification() {
        assert!(upstream(403).is_auth_failure());
        assert!(upstream(404).is_not_found());
        assert!(upstream(429).is_rate_limited());
        assert!(upstream(418).is_rate_limited());
        assert!(upstream(503).is_server_error());
        assert!(!upstream(400).is_server_error());
        assert!(!upstream(400).is_auth_failure());
    }
}
