// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Response checking shared by the upstream clients.

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Check the status and decode a JSON body.
///
/// Non-2xx statuses and unreadable bodies are transport failures; a body
/// that does not match `T` is a decode failure.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    service: &str,
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("{}: failed to read body: {}", service, e)))?;

    if !status.is_success() {
        tracing::warn!(service, status = %status, "Upstream returned error status");
        return Err(AppError::Transport(format!(
            "{}: HTTP {}: {}",
            service,
            status,
            truncate(&body, 200)
        )));
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::Decode(format!("{}: {}", service, e)))
}

/// Map a connection-level failure.
pub(crate) fn transport_error(service: &str, err: reqwest::Error) -> AppError {
    AppError::Transport(format!("{}: {}", service, err))
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
