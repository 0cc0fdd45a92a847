// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Wanderly: travel planning backend
//!
//! This crate looks up cities, recommends mood-filtered activities around
//! them, and keeps a bucket list of destinations the traveller wants to
//! visit.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::BucketListDb;
use services::{ActivityClient, BucketListStore, CityClient, CountryClient, PhotoClient, TokenCache};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub bucket_list: BucketListStore<BucketListDb>,
    pub cities: CityClient,
    pub activities: ActivityClient,
    pub photos: PhotoClient,
    pub countries: CountryClient,
}

impl AppState {
    /// Build every upstream client from `config` around the given store.
    ///
    /// The activity client gets its own token cache, so one credential is
    /// shared by every request this process serves.
    pub fn new(config: Config, db: BucketListDb) -> Self {
        let tokens = TokenCache::new(
            config.amadeus_auth_url.clone(),
            config.amadeus_client_id.clone(),
            config.amadeus_client_secret.clone(),
        );

        Self {
            bucket_list: BucketListStore::new(db),
            cities: CityClient::new(config.city_api_url.clone(), config.city_api_key.clone()),
            activities: ActivityClient::new(config.amadeus_activities_url.clone(), tokens),
            photos: PhotoClient::new(config.pexels_api_url.clone(), config.pexels_api_key.clone()),
            countries: CountryClient::new(config.country_api_url.clone()),
            config,
        }
    }
}
