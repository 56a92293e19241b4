// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Health, root and network endpoints

use api_client::ApiResult;
use cardano_types::QueryParams;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// API root: backend URL and version
    pub async fn get_root(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::ROOT, params).await
    }

    /// Backend health, `{"is_healthy": bool}`
    ///
    /// See [`ApiClient::health_check`](api_client::ApiClient::health_check) for
    /// the interpreted form.
    pub async fn get_health(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::HEALTH, params).await
    }

    /// Backend clock, `{"server_time": <unix millis>}`
    pub async fn get_health_clock(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::HEALTH_CLOCK, params).await
    }

    /// Detailed supply and stake information for the network
    pub async fn get_network(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::NETWORK, params).await
    }

    /// Current time on the Blockfrost backend
    ///
    /// Returns `Ok(None)` when the clock response carries no usable
    /// `server_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn server_time(&self) -> ApiResult<Option<DateTime<Utc>>> {
        let clock = self.get_health_clock(&QueryParams::new()).await?;
        Ok(clock
            .get("server_time")
            .and_then(Value::as_i64)
            .and_then(DateTime::from_timestamp_millis))
    }
}
