// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Country directory records (FIRST country list).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Continents offered by the region picker. "All" disables the filter.
pub const CONTINENTS: [&str; 7] = [
    "All",
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166 alpha-2 code
    pub code: String,
    pub name: String,
    /// Continent name, e.g. "Europe"
    pub region: String,
}

/// `GET /data/v1/countries` body: `{data: {"FR": {country, region}}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryListResponse {
    pub data: HashMap<String, CountryData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryData {
    pub country: String,
    pub region: String,
}
