// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano » Metadata
//!
//! Transaction metadata grouped by label. A label is a non-negative integer;
//! it is accepted as any `Display` value and interpolated as-is.

use std::fmt::Display;

use api_client::ApiResult;
use cardano_types::QueryParams;
use serde_json::Value;

use crate::{BlockfrostClient, paths};

impl BlockfrostClient {
    /// All metadata labels in use, with their usage counts
    pub async fn get_transaction_metadata_labels(&self, params: &QueryParams) -> ApiResult<Value> {
        self.get(paths::METADATA_LABELS, params).await
    }

    /// Transaction metadata under `label`, decoded to JSON
    pub async fn get_transaction_metadata_json(
        &self,
        label: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::metadata_json(label), params).await
    }

    /// Transaction metadata under `label`, as hex-encoded CBOR
    pub async fn get_transaction_metadata_cbor(
        &self,
        label: impl Display,
        params: &QueryParams,
    ) -> ApiResult<Value> {
        self.get(&paths::metadata_cbor(label), params).await
    }
}
