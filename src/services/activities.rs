// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Amadeus activity search.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityResponse, Mood};
use crate::services::mood_filter::filter_by_mood;
use crate::services::token::TokenCache;
use crate::services::upstream::{decode_json, transport_error};

/// Search radius (km) used when the caller does not pick one.
pub const DEFAULT_RADIUS_KM: u32 = 10;

const SERVICE: &str = "activities";

/// Activities API client, authenticated through the shared token cache.
#[derive(Clone)]
pub struct ActivityClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenCache,
}

impl ActivityClient {
    pub fn new(base_url: String, tokens: TokenCache) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    /// Activities around a point, narrowed to `mood` when one is given.
    ///
    /// Each call is independent; two calls for the same point both hit the
    /// API.
    pub async fn find_activities(
        &self,
        latitude: f64,
        longitude: f64,
        radius: Option<u32>,
        mood: Option<Mood>,
    ) -> Result<Vec<Activity>> {
        validate_coordinates(latitude, longitude)?;
        let radius = radius.unwrap_or(DEFAULT_RADIUS_KM);

        let access_token = self.tokens.get_token().await?;

        tracing::debug!(latitude, longitude, radius, mood = ?mood, "Fetching activities");

        let response = self
            .http
            .get(&self.base_url)
            .bearer_auth(&access_token)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("radius", radius.to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        // A revoked token will not fix itself before it expires.
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("Activities API rejected the bearer token");
            self.tokens.invalidate().await;
        }

        let body: ActivityResponse = decode_json(SERVICE, response).await?;
        let fetched = body.data.len();
        let activities = filter_by_mood(body.data, mood);

        tracing::info!(
            fetched,
            kept = activities.len(),
            mood = ?mood,
            "Activities fetched"
        );
        Ok(activities)
    }
}

pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::Validation(format!(
            "latitude {} out of range",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::Validation(format!(
            "longitude {} out of range",
            longitude
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(48.85, 2.35).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(matches!(
            validate_coordinates(91.0, 0.0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_coordinates(0.0, -180.5),
            Err(AppError::Validation(_))
        ));
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }
}
