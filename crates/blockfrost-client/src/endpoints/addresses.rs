// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano » Addresses

use api_client::ApiResult;
use cardano_types::QueryParams;
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// Information about a specific address: balance, stake address, type
    ///
    /// # Arguments
    ///
    /// * `address` - Bech32 address
    /// * `params` - Extra query parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_address(&self, address: &str, params: &QueryParams) -> ApiResult<Value> {
        self.get(&paths::address(address), params).await
    }

    /// Address information including on-chain asset metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_address_extended(
        &self,
        address: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::address_extended(address), params).await
    }

    /// Totals of received and sent assets for an address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_address_details(
        &self,
        address: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::address_details(address), params).await
    }

    /// Current UTXOs of an address
    ///
    /// Paginated upstream; pass `count`, `page` and `order` through `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_address_utxos(
        &self,
        address: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::address_utxos(address), params).await
    }

    /// Transactions involving an address
    ///
    /// Besides pagination, upstream accepts `from` and `to` block bounds
    /// (`"height"` or `"height:index"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_address_transactions(
        &self,
        address: &str,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::address_transactions(address), params)
            .await
    }
}
