// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockfrost probe
//!
//! Checks that the configured Blockfrost project can reach its network and
//! prints the latest block. Configuration comes from `BLOCKFROST_*`
//! environment variables or a `blockfrost.{json,toml,yaml}` file.

use anyhow::{Result, bail};
use blockfrost_client::{BlockfrostClient, QueryParams};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = BlockfrostClient::from_env()?;
    info!(network = %client.network(), base_url = %client.base_url(), "probing Blockfrost");

    let health = client.check_health().await?;
    if health.status.is_down() {
        bail!("Blockfrost is down: {}", health.status.description());
    }

    if let Some(server_time) = client.server_time().await? {
        info!(%server_time, "Blockfrost clock");
    }

    let block = client.get_latest_block(&QueryParams::new()).await?;
    println!("{}", serde_json::to_string_pretty(&block)?);

    Ok(())
}
