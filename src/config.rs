// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Application configuration loaded from environment variables.
//!
//! API keys and the Amadeus client secret are injected through the
//! environment (or a local `.env` file) and held in memory only.

use std::env;

const DEFAULT_AMADEUS_AUTH_URL: &str = "https://test.api.amadeus.com/v1/security/oauth2/token";
const DEFAULT_AMADEUS_ACTIVITIES_URL: &str = "https://test.api.amadeus.com/v1/shopping/activities";
const DEFAULT_CITY_API_URL: &str = "https://api.api-ninjas.com/v1/city";
const DEFAULT_PEXELS_API_URL: &str = "https://api.pexels.com/v1/search";
const DEFAULT_COUNTRY_API_URL: &str = "https://api.first.org/data/v1/countries";

/// Which bucket list backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Upstream endpoints ---
    pub amadeus_auth_url: String,
    pub amadeus_activities_url: String,
    pub city_api_url: String,
    pub pexels_api_url: String,
    pub country_api_url: String,

    // --- Service settings ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    pub store_backend: StoreBackend,

    // --- Secrets ---
    pub amadeus_client_id: String,
    pub amadeus_client_secret: String,
    /// API Ninjas key, sent as `X-Api-Key`
    pub city_api_key: String,
    /// Pexels key, sent as the raw `Authorization` header
    pub pexels_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "firestore".to_string())
            .to_lowercase()
            .as_str()
        {
            "firestore" => StoreBackend::Firestore,
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::Invalid("STORE_BACKEND", other.to_string())),
        };

        Ok(Self {
            amadeus_auth_url: env_or("AMADEUS_AUTH_URL", DEFAULT_AMADEUS_AUTH_URL),
            amadeus_activities_url: env_or(
                "AMADEUS_ACTIVITIES_URL",
                DEFAULT_AMADEUS_ACTIVITIES_URL,
            ),
            city_api_url: env_or("CITY_API_URL", DEFAULT_CITY_API_URL),
            pexels_api_url: env_or("PEXELS_API_URL", DEFAULT_PEXELS_API_URL),
            country_api_url: env_or("COUNTRY_API_URL", DEFAULT_COUNTRY_API_URL),

            frontend_url: env_or("FRONTEND_URL", "http://localhost:5173"),
            gcp_project_id: env_or("GCP_PROJECT_ID", "local-dev"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            store_backend,

            amadeus_client_id: required("AMADEUS_CLIENT_ID")?,
            amadeus_client_secret: required("AMADEUS_CLIENT_SECRET")?,
            city_api_key: required("CITY_API_KEY")?,
            pexels_api_key: required("PEXELS_API_KEY")?,
        })
    }

    /// Config for tests. Upstream URLs point nowhere useful; override them
    /// with a mock server address.
    pub fn test_default() -> Self {
        Self {
            amadeus_auth_url: "http://127.0.0.1:9/token".to_string(),
            amadeus_activities_url: "http://127.0.0.1:9/activities".to_string(),
            city_api_url: "http://127.0.0.1:9/city".to_string(),
            pexels_api_url: "http://127.0.0.1:9/search".to_string(),
            country_api_url: "http://127.0.0.1:9/countries".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
            amadeus_client_id: "test_client_id".to_string(),
            amadeus_client_secret: "test_client_secret".to_string(),
            city_api_key: "test_city_key".to_string(),
            pexels_api_key: "test_pexels_key".to_string(),
        }
    }

    /// Point every upstream at one base URL (mock server in tests).
    pub fn with_upstream_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.amadeus_auth_url = format!("{}/v1/security/oauth2/token", base);
        self.amadeus_activities_url = format!("{}/v1/shopping/activities", base);
        self.city_api_url = format!("{}/v1/city", base);
        self.pexels_api_url = format!("{}/v1/search", base);
        self.country_api_url = format!("{}/data/v1/countries", base);
        self
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
