// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Path templates of the Blockfrost endpoints
//!
//! Each function interpolates its arguments into the endpoint's path, relative
//! to the versioned base URL. Arguments are not validated or escaped here;
//! [`BlockfrostClient`](crate::BlockfrostClient) percent-encodes segments when
//! it builds the URL, and a leading `/` is ignored.
//!
//! Because arguments are spliced in as text, an argument containing `/` spans
//! several segments, a `%` is escaped rather than kept as an escape, and an
//! argument of `.` or `..` vanishes from the URL.

use std::fmt::Display;

// Addresses

/// `addresses/{address}`
pub fn address(address: &str) -> String {
    format!("addresses/{address}")
}

/// `addresses/{address}/extended`
pub fn address_extended(address: &str) -> String {
    format!("addresses/{address}/extended")
}

/// `addresses/{address}/total`
pub fn address_details(address: &str) -> String {
    format!("addresses/{address}/total")
}

/// `addresses/{address}/utxos`
pub fn address_utxos(address: &str) -> String {
    format!("addresses/{address}/utxos")
}

/// `addresses/{address}/transactions`
pub fn address_transactions(address: &str) -> String {
    format!("addresses/{address}/transactions")
}

// Blocks

/// Latest block
pub const LATEST_BLOCK: &str = "blocks/latest";

/// Transactions of the latest block
pub const LATEST_BLOCK_TXS: &str = "blocks/latest/txs";

/// `blocks/{hash_or_number}`
pub fn specific_block(hash_or_number: impl Display) -> String {
    format!("blocks/{hash_or_number}")
}

/// `/blocks/slot/{slot_number}`
pub fn specific_block_in_slot(slot_number: u64) -> String {
    format!("/blocks/slot/{slot_number}")
}

/// `/blocks/epoch/{epoch_number}/slot/{slot_number}`
pub fn specific_block_in_epoch_slot(epoch_number: u64, slot_number: u64) -> String {
    format!("/blocks/epoch/{epoch_number}/slot/{slot_number}")
}

/// `/blocks/{hash_or_number}/next`
pub fn next_blocks(hash_or_number: impl Display) -> String {
    format!("/blocks/{hash_or_number}/next")
}

/// `/blocks/{hash_or_number}/previous`
pub fn previous_blocks(hash_or_number: impl Display) -> String {
    format!("/blocks/{hash_or_number}/previous")
}

/// `/blocks/{hash_or_number}/txs`
pub fn block_txs(hash_or_number: impl Display) -> String {
    format!("/blocks/{hash_or_number}/txs")
}

/// `/blocks/{hash_or_number}/addresses`
pub fn block_addresses(hash_or_number: impl Display) -> String {
    format!("/blocks/{hash_or_number}/addresses")
}

// Epochs

/// Latest epoch
pub const LATEST_EPOCH: &str = "/epochs/latest";

/// Protocol parameters of the latest epoch
pub const LATEST_EPOCH_PROTOCOL_PARAMS: &str = "/epochs/latest/parameters";

/// `/epochs/{epoch_number}`
pub fn specific_epoch(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}")
}

/// `/epochs/{epoch_number}/next`
pub fn next_epochs(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}/next")
}

/// `/epochs/{epoch_number}/previous`
pub fn previous_epochs(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}/previous")
}

/// `/epochs/{epoch_number}/stakes`
pub fn active_stake_distribution(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}/stakes")
}

/// `/epochs/{epoch_number}/stakes/{pool_id}`
pub fn stake_distribution_by_pool(epoch_number: u64, pool_id: &str) -> String {
    format!("/epochs/{epoch_number}/stakes/{pool_id}")
}

/// `/epochs/{epoch_number}/blocks`
pub fn block_distribution(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}/blocks")
}

/// `/epochs/{epoch_number}/blocks/{pool_id}`
pub fn block_distribution_by_pool(epoch_number: u64, pool_id: &str) -> String {
    format!("/epochs/{epoch_number}/blocks/{pool_id}")
}

/// `/epochs/{epoch_number}/parameters`
pub fn protocol_params_for_epoch(epoch_number: u64) -> String {
    format!("/epochs/{epoch_number}/parameters")
}

// Ledger

/// Blockchain genesis parameters
pub const GENESIS: &str = "/genesis";

// Metadata

/// Transaction metadata labels
pub const METADATA_LABELS: &str = "/metadata/txs/labels";

/// `/metadata/txs/labels/{label}`
pub fn metadata_json(label: impl Display) -> String {
    format!("/metadata/txs/labels/{label}")
}

/// `/metadata/txs/labels/{label}/cbor`
pub fn metadata_cbor(label: impl Display) -> String {
    format!("/metadata/txs/labels/{label}/cbor")
}

// Service

/// API root information
pub const ROOT: &str = "/";

/// Backend health
pub const HEALTH: &str = "/health";

/// Backend clock
pub const HEALTH_CLOCK: &str = "/health/clock";

/// Network supply and stake information
pub const NETWORK: &str = "/network";
