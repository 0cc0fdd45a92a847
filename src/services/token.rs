// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Bearer token cache for the Amadeus activities API.
//!
//! Holds one client-credentials token in memory and requests a new one
//! when the cached token has expired or was never fetched.

use crate::error::{AppError, Result};
use crate::time_utils::expiry_after;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Token grant response.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
    pub token_type: String,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Shared, refresh-on-expiry token holder.
///
/// Clones share the same cached token. The lock is held across a grant
/// request, so concurrent callers wait for one refresh instead of issuing
/// their own.
#[derive(Clone)]
pub struct TokenCache {
    http: reqwest::Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
    cached: Arc<Mutex<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new(auth_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url,
            client_id,
            client_secret,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the cached token if it has not expired, else fetch a new one.
    pub async fn get_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.access_token.clone());
            }
            tracing::debug!("Activities token expired, requesting a new one");
        }

        let granted_at = Utc::now();
        let response = self.request_token().await?;
        let expires_at = expiry_after(granted_at, response.expires_in);

        *cached = Some(CachedToken {
            access_token: response.access_token.clone(),
            expires_at,
        });

        tracing::info!(
            token_type = %response.token_type,
            expires_in = response.expires_in,
            "Activities token cached"
        );
        Ok(response.access_token)
    }

    /// Drop the cached token so the next call performs a grant.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    /// Expiry of the cached token, if any.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.cached.lock().await.as_ref().map(|t| t.expires_at)
    }

    async fn request_token(&self) -> Result<AccessTokenResponse> {
        let response = self
            .http
            .post(&self.auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Token grant rejected");
            return Err(AppError::Auth(format!("Token grant failed with status {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("Failed to parse token response: {}", e)))
    }
}
