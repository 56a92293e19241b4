// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the Blockfrost Cardano REST API
//!
//! This crate wraps the Blockfrost API one endpoint per method. It builds the
//! request URL from typed arguments, authenticates with the project key and
//! turns the HTTP response into either the decoded JSON payload or an
//! [`ApiError`](api_client::ApiError).
//!
//! # Architecture
//!
//! - **Transport**: [`BlockfrostClient`] owns the HTTP connection, credentials and
//!   network selection, and exposes [`BlockfrostClient::get`]
//! - **Endpoint Catalog**: one method per upstream endpoint, grouped by resource in
//!   [`endpoints`]; their path templates live in [`paths`]
//! - **Configuration**: [`BlockfrostConfig`] with environment and file loading
//! - **Credentials**: [`ApiKey`] guarantees a non-empty key that never shows up in logs
//!
//! # Example
//!
//! ```rust,no_run
//! use blockfrost_client::{BlockfrostClient, QueryParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BlockfrostClient::new("mainnetProjectKey", false)?;
//!
//! let block = client.get_latest_block(&QueryParams::new()).await?;
//! println!("latest block: {}", block["hash"]);
//!
//! let utxos = client
//!     .get_address_utxos("addr1q8...", &QueryParams::new().with("count", 10))
//!     .await?;
//! println!("{utxos}");
//! # Ok(())
//! # }
//! ```

pub mod api_key;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod paths;
mod response;

pub use api_client::{ApiClient, ApiError, ApiResult, HealthCheckResult, HealthStatus};
pub use api_key::ApiKey;
pub use cardano_types::{Network, QueryParams, QueryValue};
pub use client::BlockfrostClient;
pub use config::{BlockfrostConfig, RequestTimeout};
