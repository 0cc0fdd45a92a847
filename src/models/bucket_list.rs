// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Saved destinations ("bucket list").

use crate::models::Activity;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A destination the user saved, with the activities they picked.
///
/// `activities` is a snapshot taken at save time; nothing links it back to
/// the activities API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct BucketListCity {
    /// Store-assigned identifier (None until first save)
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Image reference (asset name or URL)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Last save time (RFC 3339), set by the store
    #[serde(default)]
    pub saved_at: Option<String>,
}

impl BucketListCity {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            image: String::new(),
            description: String::new(),
            latitude,
            longitude,
            country: None,
            continent: None,
            activities: Vec::new(),
            saved_at: None,
        }
    }
}

/// Fields a bucket list query may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketListField {
    Name,
    Country,
    Continent,
}

impl BucketListField {
    /// Parse a caller-supplied field name; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "name" | "city" => Some(BucketListField::Name),
            "country" => Some(BucketListField::Country),
            "continent" => Some(BucketListField::Continent),
            _ => None,
        }
    }

    /// Document field name in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            BucketListField::Name => "name",
            BucketListField::Country => "country",
            BucketListField::Continent => "continent",
        }
    }

    pub fn value_of(self, city: &BucketListCity) -> Option<&str> {
        match self {
            BucketListField::Name => Some(city.name.as_str()),
            BucketListField::Country => city.country.as_deref(),
            BucketListField::Continent => city.continent.as_deref(),
        }
    }
}
