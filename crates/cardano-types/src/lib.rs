// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Blockfrost Cardano client
//!
//! This crate provides the value types that are shared between the
//! provider-neutral `api-client` crate and the concrete Blockfrost client,
//! avoiding circular dependencies.

pub mod network;
pub mod query;

pub use network::{Network, NetworkParseError};
pub use query::{QueryParams, QueryValue};
