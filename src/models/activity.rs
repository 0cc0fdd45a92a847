// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Activity model as returned by the Amadeus activities API.
//!
//! Only the price/booking-link shape of the live API is modelled; bucket
//! list documents embed the same records as a snapshot.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Envelope returned by `GET /v1/shopping/activities`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityResponse {
    pub data: Vec<Activity>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A bookable activity near a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Activity {
    /// Amadeus activity ID (absent on hand-built records)
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Short description, the only text the mood filter looks at
    #[serde(default)]
    pub short_description: Option<String>,
    pub geo_code: GeoCode,
    #[serde(default)]
    pub price: Option<Price>,
    /// Image URLs
    #[serde(default)]
    pub pictures: Option<Vec<String>>,
    #[serde(default)]
    pub booking_link: Option<String>,
    /// Free-form duration, e.g. "2 hours"
    #[serde(default)]
    pub minimum_duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Price {
    /// Decimal amount as sent by the API (string)
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl Activity {
    /// Minimal activity with a description, for fixtures and tests.
    pub fn described(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            short_description: Some(description.to_string()),
            geo_code: GeoCode {
                latitude: 0.0,
                longitude: 0.0,
            },
            price: None,
            pictures: None,
            booking_link: None,
            minimum_duration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_amadeus_envelope() {
        let body = r#"{
            "data": [{
                "id": "3216547684",
                "type": "activity",
                "name": "Skip-the-line tickets to the Louvre",
                "shortDescription": "Discover timeless art at the Louvre.",
                "geoCode": {"latitude": 48.8606, "longitude": 2.3376},
                "price": {"amount": "15.00", "currencyCode": "EUR"},
                "pictures": ["https://example.com/louvre.jpg"],
                "bookingLink": "https://example.com/louvre",
                "minimumDuration": "3 hours"
            }, {
                "geoCode": {"latitude": 48.85, "longitude": 2.35}
            }],
            "meta": {"count": 2, "links": {"self": "https://test.api.amadeus.com/v1/shopping/activities"}}
        }"#;

        let response: ActivityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 2);

        let louvre = &response.data[0];
        assert_eq!(louvre.id.as_deref(), Some("3216547684"));
        assert_eq!(
            louvre.price.as_ref().and_then(|p| p.currency_code.as_deref()),
            Some("EUR")
        );
        assert_eq!(louvre.minimum_duration.as_deref(), Some("3 hours"));

        let bare = &response.data[1];
        assert!(bare.id.is_none());
        assert!(bare.short_description.is_none());
        assert_eq!(response.meta.unwrap().count, Some(2));
    }

    #[test]
    fn test_missing_meta_is_accepted() {
        let response: ActivityResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
        assert!(response.meta.is_none());
    }
}
