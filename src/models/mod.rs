// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Data models for the application.

pub mod activity;
pub mod bucket_list;
pub mod city;
pub mod country;
pub mod mood;
pub mod photo;
pub mod preference;

pub use activity::{Activity, ActivityResponse, GeoCode, Price};
pub use bucket_list::BucketListCity;
pub use city::City;
pub use country::Country;
pub use mood::Mood;
pub use preference::{BudgetTier, DestinationIntent};
