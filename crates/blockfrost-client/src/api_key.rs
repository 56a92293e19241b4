// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockfrost project key
//!
//! [`ApiKey`] makes an empty credential unrepresentable: once you hold one, it
//! contains at least one non-whitespace character. The key is sent as the
//! `project_id` header and is otherwise kept out of sight: `Debug` output
//! shows only a short prefix.
//!
//! ```rust
//! use blockfrost_client::ApiKey;
//!
//! let key = ApiKey::new("mainnetAbCdEf0123456789").unwrap();
//! assert_eq!(key.expose(), "mainnetAbCdEf0123456789");
//! assert!(!format!("{key:?}").contains("0123456789"));
//!
//! assert!(ApiKey::new("").is_err());
//! assert!(ApiKey::new("   ").is_err());
//! ```

use std::{fmt, str::FromStr};

use api_client::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer, de};

// Blockfrost keys start with the network name; that much is safe to show.
const VISIBLE_PREFIX_LEN: usize = 7;

/// A non-empty Blockfrost project key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Validate and wrap a project key
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the key is empty or whitespace-only
    pub fn new(key: impl Into<String>) -> ApiResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ApiError::configuration("No API key defined"));
        }
        Ok(Self(key.into_boxed_str()))
    }

    /// The raw key, for building the authentication header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A log-safe rendering of the key
    pub fn masked(&self) -> String {
        let visible: String = if self.0.chars().count() > VISIBLE_PREFIX_LEN * 2 {
            self.0.chars().take(VISIBLE_PREFIX_LEN).collect()
        } else {
            String::new()
        };
        format!("{visible}***")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl FromStr for ApiKey {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::new(key).map_err(|e| de::Error::custom(e.to_string()))
    }
}
