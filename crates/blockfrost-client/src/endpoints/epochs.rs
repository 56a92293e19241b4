// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano » Epochs

use api_client::ApiResult;
use cardano_types::QueryParams;
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// The current epoch
    pub async fn get_latest_epoch(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::LATEST_EPOCH, params).await
    }

    /// Protocol parameters in effect for the current epoch
    pub async fn get_latest_epoch_protocol_params(
        &self,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(paths::LATEST_EPOCH_PROTOCOL_PARAMS, params).await
    }

    /// A specific epoch
    pub async fn get_specific_epoch(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::specific_epoch(epoch_number), params).await
    }

    /// Epochs following `epoch_number`
    pub async fn get_next_epochs(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::next_epochs(epoch_number), params).await
    }

    /// Epochs preceding `epoch_number`
    pub async fn get_previous_epochs(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::previous_epochs(epoch_number), params).await
    }

    /// Active stake distribution snapshot of an epoch, per stake address
    pub async fn get_active_stake_distribution(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::active_stake_distribution(epoch_number), params)
            .await
    }

    /// Active stake distribution of an epoch, restricted to one pool
    ///
    /// `pool_id` is the Bech32 (`pool1...`) or hex pool identifier.
    pub async fn get_stake_distribution_by_pool(
        &self,
        epoch_number: u64,
        pool_id: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(
            &paths::stake_distribution_by_pool(epoch_number, pool_id),
            params,
        )
        .await
    }

    /// Hashes of the blocks minted in an epoch
    pub async fn get_block_distribution(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::block_distribution(epoch_number), params)
            .await
    }

    /// Hashes of the blocks a pool minted in an epoch
    pub async fn get_block_distribution_by_pool(
        &self,
        epoch_number: u64,
        pool_id: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(
            &paths::block_distribution_by_pool(epoch_number, pool_id),
            params,
        )
        .await
    }

    /// Protocol parameters of an epoch
    pub async fn get_protocol_params_for_epoch(
        &self,
        epoch_number: u64,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::protocol_params_for_epoch(epoch_number), params)
            .await
    }
}
