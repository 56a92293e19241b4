// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response classification: decoded payload or typed error

use api_client::{ApiError, ApiResult, RequestInfo, ResponseInfo, UpstreamError};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Read status, headers and body of a response
pub(crate) async fn read(response: Response) -> ApiResult<ResponseInfo> {
    let status = response.status().as_u16();
    let url = response.url().clone();
    let headers = response.headers().clone();
    let body = response.text().await?;

    debug!(status, %url, body_len = body.len(), "received Blockfrost response");

    Ok(ResponseInfo {
        status,
        url,
        headers,
        body,
    })
}

/// Turn a fully read response into the decoded payload or an error
///
/// Only `200 OK` is a success. Any other status becomes an
/// [`ApiError::Upstream`]; no status is retried.
pub(crate) fn classify(request: RequestInfo, response: ResponseInfo) -> ApiResult<Value> {
    if response.status != StatusCode::OK.as_u16() {
        return Err(upstream_error(request, response).into());
    }

    serde_json::from_str(&response.body).map_err(|e| {
        warn!(url = %request.url, error = %e, "Blockfrost returned 200 with a non-JSON body");
        ApiError::MalformedResponse {
            message: e.to_string(),
            response: Box::new(response),
        }
    })
}

/// Build the error for a rejected request
///
/// Blockfrost answers with `{"status_code": <int>, "message": <str>, ...}`.
/// Each field is read on its own, so a mistyped `status_code` does not cost
/// the message.
fn upstream_error(request: RequestInfo, response: ResponseInfo) -> UpstreamError {
    let envelope = serde_json::from_str::<Value>(&response.body).ok();

    let code = envelope
        .as_ref()
        .and_then(|envelope| envelope.get("status_code"))
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let message = envelope
        .as_ref()
        .and_then(|envelope| envelope.get("message"))
        .and_then(Value::as_str)
        .map_or_else(
            || {
                format!(
                    "Invalid JSON error message from Blockfrost: {}",
                    response.body
                )
            },
            str::to_string,
        );

    warn!(
        url = %request.url,
        status = response.status,
        code,
        upstream_message = %message,
        "Blockfrost API error"
    );

    UpstreamError {
        status_code: response.status,
        code,
        message,
        request,
        response,
    }
}
