// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! City records from the city directory API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A city as returned by `GET /v1/city?name=`.
///
/// The directory has no stable identifier, so one is generated per decode.
/// Two fetches of the same city yield different IDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct City {
    #[serde(default = "generate_city_id")]
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub population: u64,
    pub is_capital: bool,
}

fn generate_city_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl City {
    pub fn new(
        name: &str,
        latitude: f64,
        longitude: f64,
        country: &str,
        population: u64,
        is_capital: bool,
    ) -> Self {
        Self {
            id: generate_city_id(),
            name: name.to_string(),
            latitude,
            longitude,
            country: country.to_string(),
            population,
            is_capital,
        }
    }
}

/// First city whose name contains `name`, ignoring case.
pub fn search_city<'a>(cities: &'a [City], name: &str) -> Option<&'a City> {
    let needle = name.to_lowercase();
    cities
        .iter()
        .find(|c| c.name.to_lowercase().contains(&needle))
}
