// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Country directory for the region picker.

use crate::error::Result;
use crate::models::country::{CountryListResponse, CONTINENTS};
use crate::models::Country;
use crate::services::upstream::{decode_json, transport_error};

const SERVICE: &str = "country list";
const COUNTRY_LIMIT: &str = "250";

#[derive(Clone)]
pub struct CountryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CountryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// All countries, names cleaned and sorted alphabetically.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("limit", COUNTRY_LIMIT)])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let body: CountryListResponse = decode_json(SERVICE, response).await?;

        let mut countries: Vec<Country> = body
            .data
            .into_iter()
            .map(|(code, data)| Country {
                code,
                name: clean_country_name(&data.country),
                region: data.region,
            })
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(count = countries.len(), "Countries fetched");
        Ok(countries)
    }
}

/// Strip a trailing "(the)" as in "Netherlands (the)".
pub fn clean_country_name(name: &str) -> String {
    const SUFFIX: &str = "(the)";
    let trimmed = name.trim();
    let cut = trimmed.len().saturating_sub(SUFFIX.len());
    match trimmed.get(cut..) {
        Some(tail) if tail.eq_ignore_ascii_case(SUFFIX) => trimmed[..cut].trim().to_string(),
        _ => trimmed.to_string(),
    }
}

/// Countries whose name contains `query` (any case) within `continent`.
///
/// An empty query matches every name; "All" or no continent matches every
/// region.
pub fn filter_countries(countries: &[Country], query: &str, continent: Option<&str>) -> Vec<Country> {
    let query = query.trim().to_lowercase();
    let continent = continent.filter(|c| *c != CONTINENTS[0]);

    countries
        .iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .filter(|c| continent.map_or(true, |wanted| c.region == wanted))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, region: &str) -> Country {
        Country {
            code: code.to_string(),
            name: name.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_clean_country_name() {
        assert_eq!(clean_country_name("Netherlands (the)"), "Netherlands");
        assert_eq!(clean_country_name("Gambia (The)"), "Gambia");
        assert_eq!(clean_country_name("France"), "France");
    }

    #[test]
    fn test_filter_by_query_and_continent() {
        let countries = vec![
            country("FR", "France", "Europe"),
            country("FI", "Finland", "Europe"),
            country("JP", "Japan", "Asia"),
        ];

        let europe = filter_countries(&countries, "", Some("Europe"));
        assert_eq!(europe.len(), 2);

        let fin = filter_countries(&countries, "FIN", Some("All"));
        assert_eq!(fin, vec![country("FI", "Finland", "Europe")]);

        let none = filter_countries(&countries, "jap", Some("Europe"));
        assert!(none.is_empty());

        assert_eq!(filter_countries(&countries, "", None).len(), 3);
    }
}
