// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! City directory lookup (API Ninjas).

use crate::error::{AppError, Result};
use crate::models::City;
use crate::services::upstream::{decode_json, transport_error};
use serde::Deserialize;

const SERVICE: &str = "city lookup";

/// The directory answers either a list or `{"error": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CityLookupResponse {
    Cities(Vec<City>),
    Failure { error: String },
}

#[derive(Clone)]
pub struct CityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CityClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Cities matching `name`. An empty name is rejected without a request.
    pub async fn find_cities(&self, name: &str) -> Result<Vec<City>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "City name cannot be empty".to_string(),
            ));
        }

        tracing::debug!(name, "Looking up cities");

        let response = self
            .http
            .get(&self.base_url)
            .header("X-Api-Key", &self.api_key)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        match decode_json(SERVICE, response).await? {
            CityLookupResponse::Cities(cities) => {
                tracing::debug!(name, count = cities.len(), "Cities decoded");
                Ok(cities)
            }
            CityLookupResponse::Failure { error } => {
                tracing::warn!(name, error = %error, "City lookup returned an error body");
                Err(AppError::Transport(format!("{}: {}", SERVICE, error)))
            }
        }
    }
}
