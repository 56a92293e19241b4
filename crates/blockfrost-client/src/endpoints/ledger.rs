// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano » Ledger

use api_client::ApiResult;
use cardano_types::QueryParams;
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// Genesis parameters of the blockchain (network magic, epoch length,
    /// slot length, max supply, ...)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or upstream rejects it
    pub async fn get_blockchain_genesis(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::GENESIS, params).await
    }
}
