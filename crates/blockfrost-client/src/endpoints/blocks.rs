// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano » Blocks
//!
//! Methods taking `hash_or_number` accept either a block hash (`&str`) or a
//! block height (any integer).

use std::fmt::Display;

use api_client::ApiResult;
use cardano_types::QueryParams;
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// The latest block available to the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_latest_block(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::LATEST_BLOCK, params).await
    }

    /// Transaction hashes of the latest block
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_latest_block_txs(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::LATEST_BLOCK_TXS, params).await
    }

    /// A block by hash or height
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_specific_block(
        &self,
        hash_or_number: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::specific_block(hash_or_number), params)
            .await
    }

    /// The block produced in an absolute slot
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_specific_block_in_slot(
        &self,
        slot_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::specific_block_in_slot(slot_number), params)
            .await
    }

    /// The block produced in a slot relative to the start of an epoch
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_specific_block_in_epoch_slot(
        &self,
        epoch_number: u64,
        slot_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(
            &paths::specific_block_in_epoch_slot(epoch_number, slot_number),
            params,
        )
        .await
    }

    /// Blocks following a given block
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_next_blocks(
        &self,
        hash_or_number: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::next_blocks(hash_or_number), params).await
    }

    /// Blocks preceding a given block
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_previous_blocks(
        &self,
        hash_or_number: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::previous_blocks(hash_or_number), params)
            .await
    }

    /// Transaction hashes within a block
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_block_txs(
        &self,
        hash_or_number: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::block_txs(hash_or_number), params).await
    }

    /// Addresses affected by a block, with the transactions touching them
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_block_addresses(
        &self,
        hash_or_number: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::block_addresses(hash_or_number), params)
            .await
    }
}
