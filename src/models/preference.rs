// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Budget tiers and destination intent for the preference flow.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Coarse budget label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum BudgetTier {
    Cheap,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Cheap => "Cheap",
            BudgetTier::Moderate => "Moderate",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown budget tier: {0}")]
pub struct UnknownBudget(String);

impl FromStr for BudgetTier {
    type Err = UnknownBudget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cheap" => Ok(BudgetTier::Cheap),
            "moderate" => Ok(BudgetTier::Moderate),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(UnknownBudget(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for BudgetTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Answer to "Do you have a destination in mind?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationIntent {
    /// Pick a city, then browse its activities.
    HaveDestination,
    /// Browse suggested cities around the user.
    Explore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_parse() {
        assert_eq!("luxury".parse::<BudgetTier>().unwrap(), BudgetTier::Luxury);
        assert_eq!("Cheap".parse::<BudgetTier>().unwrap(), BudgetTier::Cheap);
        assert!("free".parse::<BudgetTier>().is_err());
        assert_eq!(BudgetTier::default(), BudgetTier::Moderate);
    }
}
