// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Interpreted upstream health
//!
//! Blockfrost answers `/health` with `{"is_healthy": bool}`, or rejects the
//! request altogether. [`HealthStatus`] folds both outcomes into one value.

use std::{fmt, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UpstreamError;

/// Health of an upstream API as seen by this client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum HealthStatus {
    Up,
    /// Reachable, but answers are not trustworthy right now
    Degraded { reason: String },
    /// Unhealthy, or unusable with the configured credentials
    Down { reason: String },
}

impl HealthStatus {
    /// Interpret the `is_healthy` flag of a health response
    ///
    /// A missing flag means the body was not the expected shape.
    pub fn from_flag(is_healthy: Option<bool>) -> Self {
        match is_healthy {
            Some(true) => Self::Up,
            Some(false) => Self::Down {
                reason: "Upstream reports is_healthy=false".to_string(),
            },
            None => Self::Degraded {
                reason: "Health response lacks is_healthy".to_string(),
            },
        }
    }

    /// Interpret an upstream rejection of the health request
    pub fn from_rejection(error: &UpstreamError) -> Self {
        if error.is_auth_failure() {
            Self::Down {
                reason: "Authentication failed".to_string(),
            }
        } else if error.is_rate_limited() {
            Self::Degraded {
                reason: "Rate limited".to_string(),
            }
        } else if error.is_server_error() {
            Self::Down {
                reason: format!("API returned status {}", error.status_code),
            }
        } else {
            Self::Degraded {
                reason: format!("API returned status {}", error.status_code),
            }
        }
    }

    /// Whether the service is fully healthy
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// `Up` or `Degraded`: requests can still be attempted
    pub fn is_available(&self) -> bool {
        !self.is_down()
    }

    /// Whether the service cannot be used right now
    pub fn is_down(&self) -> bool {
        matches!(self, Self::Down { .. })
    }

    /// Why the service is not `Up`
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Up => None,
            Self::Degraded { reason } | Self::Down { reason } => Some(reason),
        }
    }

    /// Human-readable summary
    pub fn description(&self) -> &str {
        self.reason().unwrap_or("Service is healthy")
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Degraded { reason } => write!(f, "degraded ({reason})"),
            Self::Down { reason } => write!(f, "down ({reason})"),
        }
    }
}

/// A timed health observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Interpreted outcome of the check
    pub status: HealthStatus,
    /// Round trip of the health request
    pub response_time: Duration,
    /// When the check completed
    pub checked_at: DateTime<Utc>,
    /// Which deployment was checked
    pub details: Option<String>,
}

impl HealthCheckResult {
    /// Record `status`, observed after `response_time`, as of now
    pub fn new(status: HealthStatus, response_time: Duration) -> Self {
        Self {
            status,
            response_time,
            checked_at: Utc::now(),
            details: None,
        }
    }

    /// Attach a free-form description of the checked deployment
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
