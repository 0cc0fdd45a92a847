// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Services module - upstream clients and recommendation logic.

pub mod activities;
pub mod bucket_list;
pub mod city;
pub mod classifier;
pub mod country;
pub mod flow;
pub mod mood_filter;
pub mod photo;
pub mod token;
mod upstream;

pub use activities::{ActivityClient, DEFAULT_RADIUS_KM};
pub use bucket_list::{BucketListStore, SaveOutcome};
pub use city::CityClient;
pub use classifier::{infer_budget, infer_mood_tags};
pub use country::CountryClient;
pub use flow::{FlowStep, PreferenceFlow};
pub use mood_filter::filter_by_mood;
pub use photo::PhotoClient;
pub use token::TokenCache;
