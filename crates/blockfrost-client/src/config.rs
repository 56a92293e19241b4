// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! [`BlockfrostConfig`] is valid by construction: the API key is an
//! [`ApiKey`] and the timeout a [`RequestTimeout`]. It can be built in code or
//! loaded from the environment and an optional configuration file.

use std::{path::Path, time::Duration};

use anyhow::ensure;
use api_client::{ApiError, ApiResult};
use cardano_types::Network;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::api_key::ApiKey;

const ENV_PREFIX: &str = "BLOCKFROST";
const DEFAULT_CONFIG_FILE: &str = "blockfrost";

/// Upper bound on a single Blockfrost request, whole seconds in `1..=300`
///
/// Deserializes from an integer number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct RequestTimeout(Duration);

impl RequestTimeout {
    /// Thirty seconds
    pub const DEFAULT: Self = Self(Duration::from_secs(30));
    /// Largest accepted timeout
    pub const MAX_SECONDS: u64 = 300;

    /// Validate a timeout given in whole seconds
    ///
    /// # Errors
    ///
    /// Returns an error for zero or for more than [`Self::MAX_SECONDS`]
    pub fn from_secs(seconds: u64) -> anyhow::Result<Self> {
        ensure!(seconds > 0, "request timeout must be at least one second");
        ensure!(
            seconds <= Self::MAX_SECONDS,
            "request timeout of {seconds}s exceeds {}s",
            Self::MAX_SECONDS
        );
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// The timeout as handed to the HTTP client
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl TryFrom<u64> for RequestTimeout {
    type Error = anyhow::Error;

    fn try_from(seconds: u64) -> anyhow::Result<Self> {
        Self::from_secs(seconds)
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for [`BlockfrostClient`](crate::BlockfrostClient)
#[derive(Debug, Clone, Deserialize)]
pub struct BlockfrostConfig {
    /// Blockfrost project key, sent as the `project_id` header
    pub api_key: ApiKey,
    /// Network whose deployment the client talks to
    #[serde(default)]
    pub network: Network,
    /// Request timeout applied by the HTTP client
    #[serde(default)]
    pub timeout_seconds: RequestTimeout,
    /// Replaces the network's public base URL, e.g. for a self-hosted instance
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl BlockfrostConfig {
    /// Create a configuration for `network` with default timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the API key is empty
    pub fn new(api_key: impl Into<String>, network: Network) -> ApiResult<Self> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            network,
            timeout_seconds: RequestTimeout::default(),
            base_url: None,
        })
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout_seconds: RequestTimeout) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// The base URL requests are resolved against
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the network's default URL cannot be
    /// parsed, which would indicate a broken build
    pub fn effective_base_url(&self) -> ApiResult<Url> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(&self.network.base_url()).map_err(|e| {
                ApiError::configuration(format!("invalid base URL for {}: {e}", self.network))
            }),
        }
    }

    /// Load configuration from `blockfrost.{json,toml,yaml}` (if present) and
    /// `BLOCKFROST_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if configuration is missing or invalid.
    pub fn from_env() -> ApiResult<Self> {
        Self::load(None)
    }

    /// Load configuration from an explicit file plus `BLOCKFROST_*` environment
    /// variables
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the file cannot be read or the
    /// configuration is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        Self::load(Some(path.as_ref()))
    }

    fn load(file: Option<&Path>) -> ApiResult<Self> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .try_parsing(true);
        Self::load_from(file, environment).map_err(|e| {
            ApiError::configuration(format!("failed to load configuration: {e}"))
        })
    }

    /// Configuration is loaded in the following order (later sources override
    /// earlier ones):
    /// 1. Default values
    /// 2. Configuration file (explicit path, or optional `blockfrost.*`)
    /// 3. Environment variables with `BLOCKFROST_` prefix
    fn load_from(file: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("network", Network::default().name())?
            .set_default("timeout_seconds", RequestTimeout::DEFAULT.as_duration().as_secs())?
            .add_source(file_source)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
