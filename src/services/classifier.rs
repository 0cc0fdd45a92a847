// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Mood and budget labels inferred from city size.

use crate::models::{BudgetTier, City, Mood};

const BIG_CITY_POPULATION: u64 = 1_000_000;
const SMALL_TOWN_POPULATION: u64 = 50_000;
const CHEAP_BELOW_POPULATION: u64 = 100_000;

/// Mood tags for a city. Tags are independent: a capital of a million
/// people is both Cultural and Adventurous.
///
/// Order is always Cultural, Adventurous, Relaxed.
pub fn infer_mood_tags(city: &City) -> Vec<Mood> {
    let mut tags = Vec::with_capacity(3);
    if city.is_capital {
        tags.push(Mood::Cultural);
    }
    if city.population > BIG_CITY_POPULATION {
        tags.push(Mood::Adventurous);
    }
    if city.population < SMALL_TOWN_POPULATION {
        tags.push(Mood::Relaxed);
    }
    tags
}

/// Budget tier by population: under 100k Cheap, under 1M Moderate, else Luxury.
pub fn infer_budget(city: &City) -> BudgetTier {
    match city.population {
        p if p < CHEAP_BELOW_POPULATION => BudgetTier::Cheap,
        p if p < BIG_CITY_POPULATION => BudgetTier::Moderate,
        _ => BudgetTier::Luxury,
    }
}
