// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint catalog
//!
//! One method per Blockfrost endpoint, implemented on
//! [`BlockfrostClient`](crate::BlockfrostClient) and grouped by resource.
//! Every method takes its path arguments followed by a [`QueryParams`] that is
//! forwarded verbatim, and returns the decoded JSON payload. Argument shapes
//! (address format, pool id encoding) are not checked locally; Blockfrost
//! reports invalid input through [`ApiError::Upstream`].
//!
//! [`QueryParams`]: cardano_types::QueryParams
//! [`ApiError::Upstream`]: api_client::ApiError::Upstream

pub mod addresses;
pub mod blocks;
pub mod epochs;
pub mod ledger;
pub mod metadata;
pub mod service;
