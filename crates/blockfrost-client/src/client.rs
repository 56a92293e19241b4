// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockfrost transport
//!
//! [`BlockfrostClient`] holds one reusable HTTP client with the authentication
//! headers baked in. Every endpoint method funnels into
//! [`BlockfrostClient::get`], which builds the URL, performs the request and
//! classifies the response.

use std::time::Instant;

use api_client::{ApiClient, ApiError, ApiResult, HealthCheckResult, HealthStatus, RequestInfo};
use cardano_types::{Network, QueryParams};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::{api_key::ApiKey, config::BlockfrostConfig, response};

const PROJECT_ID_HEADER: &str = "project_id";
const USER_AGENT: &str = concat!("blockfrost-client/", env!("CARGO_PKG_VERSION"));

/// Client for the Blockfrost Cardano API
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct BlockfrostClient {
    http: Client,
    base_url: Url,
    network: Network,
}

impl BlockfrostClient {
    /// Create a client for mainnet, or testnet when `testnet` is set
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `api_key` is empty
    pub fn new(api_key: impl Into<String>, testnet: bool) -> ApiResult<Self> {
        Self::for_network(api_key, Network::from_testnet_flag(testnet))
    }

    /// Create a client for `network` with default settings
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `api_key` is empty
    pub fn for_network(api_key: impl Into<String>, network: Network) -> ApiResult<Self> {
        Self::with_config(BlockfrostConfig::new(api_key, network)?)
    }

    /// Create a client from `BLOCKFROST_*` environment variables and an optional
    /// `blockfrost.*` configuration file
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if configuration is missing or invalid
    pub fn from_env() -> ApiResult<Self> {
        Self::with_config(BlockfrostConfig::from_env()?)
    }

    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the key cannot be used as a header
    /// value or the base URL cannot carry a path, and [`ApiError::Http`] if the
    /// HTTP client cannot be built
    pub fn with_config(config: BlockfrostConfig) -> ApiResult<Self> {
        let base_url = config.effective_base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::configuration(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        let http = Client::builder()
            .default_headers(default_headers(&config.api_key)?)
            .timeout(config.timeout_seconds.as_duration())
            .user_agent(USER_AGENT)
            .build()?;

        debug!(
            network = %config.network,
            %base_url,
            api_key = %config.api_key.masked(),
            "created Blockfrost client"
        );

        Ok(Self {
            http,
            base_url,
            network: config.network,
        })
    }

    /// The network this client talks to
    pub fn network(&self) -> Network {
        self.network
    }

    /// The versioned base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL a request for `path` targets, without query parameters
    ///
    /// Path segments are appended to the base URL and percent-encoded; empty
    /// segments, including a leading `/`, are dropped.
    ///
    /// Arguments are taken as raw text, never as pre-encoded: a `%` is itself
    /// escaped, so `a%20b` is sent as `a%2520b`. Segments that are exactly `.`
    /// or `..` are skipped, so `addresses/..` targets `addresses`.
    pub fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let mut segments = path.split('/').filter(|segment| !segment.is_empty()).peekable();
        if segments.peek().is_none() {
            return url;
        }

        // `cannot_be_a_base` is rejected at construction
        if let Ok(mut url_segments) = url.path_segments_mut() {
            url_segments.pop_if_empty().extend(segments);
        }
        url
    }

    /// The full URL a request for `path` with `params` targets
    pub fn request_url(&self, path: &str, params: &QueryParams) -> Url {
        let mut url = self.endpoint_url(path);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (key, value.to_string())));
        }
        url
    }

    /// Perform a GET request against `path` and decode the JSON response
    ///
    /// # Arguments
    ///
    /// * `path` - Relative endpoint path with arguments already interpolated
    /// * `params` - Query parameters, forwarded verbatim
    ///
    /// # Errors
    ///
    /// - [`ApiError::Upstream`] for any status other than 200
    /// - [`ApiError::MalformedResponse`] for a 200 whose body is not JSON
    /// - [`ApiError::Http`] for transport failures, unchanged
    pub async fn get(&self, path: &str, params: &QueryParams) -> ApiResult<Value> {
        let url = self.request_url(path, params);
        let request = RequestInfo::get(url.clone());

        debug!(%url, network = %self.network, "sending Blockfrost request");

        let response = self.http.get(url).send().await?;
        let response = response::read(response).await?;
        response::classify(request, response)
    }

    /// Run a health check and record how long it took
    ///
    /// # Errors
    ///
    /// Returns an error if the health endpoint cannot be reached
    pub async fn check_health(&self) -> ApiResult<HealthCheckResult> {
        let start_time = Instant::now();
        let status = self.health_check().await?;
        let response_time = start_time.elapsed();

        info!(
            network = %self.network,
            status = status.description(),
            ?response_time,
            "Blockfrost health check finished"
        );

        Ok(HealthCheckResult::new(status, response_time).with_details(format!(
            "{} ({})",
            self.base_url, self.network
        )))
    }
}

fn default_headers(api_key: &ApiKey) -> ApiResult<HeaderMap> {
    let mut project_id = HeaderValue::from_str(api_key.expose()).map_err(|_| {
        ApiError::configuration("API key contains characters not allowed in an HTTP header")
    })?;
    project_id.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(PROJECT_ID_HEADER, project_id);
    Ok(headers)
}

impl ApiClient for BlockfrostClient {
    async fn health_check(&self) -> ApiResult<HealthStatus> {
        let status = match self.get_health(&QueryParams::new()).await {
            Ok(body) => HealthStatus::from_flag(body.get("is_healthy").and_then(Value::as_bool)),
            Err(ApiError::Upstream(error)) => HealthStatus::from_rejection(&error),
            Err(ApiError::MalformedResponse { message, .. }) => HealthStatus::Degraded {
                reason: format!("Malformed health response: {message}"),
            },
            Err(error) => return Err(error),
        };

        if !status.is_up() {
            warn!(network = %self.network, %status, "Blockfrost is not healthy");
        }

        Ok(status)
    }

    fn network(&self) -> Network {
        self.network
    }

    fn name(&self) -> &'static str {
        "blockfrost"
    }
}
