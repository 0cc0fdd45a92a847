// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Stock photo lookup (Pexels) for city cards.

use crate::error::{AppError, Result};
use crate::models::photo::PexelsResponse;
use crate::services::upstream::{decode_json, transport_error};
use futures_util::{stream, StreamExt};
use std::collections::HashMap;

const SERVICE: &str = "photo search";
const MAX_CONCURRENT_PHOTO_LOOKUPS: usize = 8;

#[derive(Clone)]
pub struct PhotoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PhotoClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Large-image URL of the first photo for "<city> city".
    ///
    /// `Ok(None)` means the search succeeded but found nothing.
    pub async fn find_photo(&self, city: &str) -> Result<Option<String>> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::Validation(
                "City name cannot be empty".to_string(),
            ));
        }

        let query = format!("{} city", city);
        let response = self
            .http
            .get(&self.base_url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[("query", query.as_str()), ("per_page", "1")])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let body: PexelsResponse = decode_json(SERVICE, response).await?;
        let url = body.photos.into_iter().next().map(|p| p.src.large);

        if url.is_none() {
            tracing::debug!(city, "No photos found");
        }
        Ok(url)
    }

    /// Look up photos for several cities at once.
    ///
    /// Lookups are independent; a failed lookup is logged and reported as
    /// no photo for that city.
    pub async fn find_photos(&self, cities: &[String]) -> HashMap<String, Option<String>> {
        stream::iter(cities.iter().cloned())
            .map(|city| async move {
                let url = match self.find_photo(&city).await {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::warn!(city = %city, error = %e, "Photo lookup failed");
                        None
                    }
                };
                (city, url)
            })
            .buffer_unordered(MAX_CONCURRENT_PHOTO_LOOKUPS)
            .collect()
            .await
    }
}
