// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Trip moods and their activity keywords.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Trip-style preference used to narrow activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum Mood {
    #[default]
    Relaxed,
    Adventurous,
    Cultural,
}

const RELAXED_KEYWORDS: &[&str] = &[
    "relax",
    "calm",
    "peaceful",
    "serene",
    "tranquil",
    "spa",
    "retreat",
    "wellness",
    "meditation",
    "yoga",
    "beach",
    "nature",
    "scenic",
    "quiet",
    "garden",
    "lake",
    "sunset",
    "cruise",
    "picnic",
    "massage",
    "leisure",
    "hot spring",
];

const ADVENTUROUS_KEYWORDS: &[&str] = &[
    "adventure",
    "exciting",
    "thrill",
    "fun",
    "entertainment",
    "party",
    "hiking",
    "climbing",
    "rafting",
    "extreme",
    "wild",
    "outdoor",
    "exploration",
    "biking",
    "zipline",
    "off-road",
    "paragliding",
    "safari",
    "diving",
    "kayaking",
    "trek",
    "surf",
];

const CULTURAL_KEYWORDS: &[&str] = &[
    "culture",
    "historical",
    "museum",
    "art",
    "heritage",
    "architecture",
    "landmark",
    "gallery",
    "tradition",
    "local",
    "craft",
    "exhibit",
    "archaeology",
    "performance",
    "festival",
    "theater",
    "opera",
    "classical",
    "historic",
    "monument",
    "ancient",
    "castle",
    "palace",
    "cathedral",
    "temple",
    "history",
];

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Relaxed, Mood::Adventurous, Mood::Cultural];

    /// Lowercase keywords matched as substrings of activity descriptions.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Relaxed => RELAXED_KEYWORDS,
            Mood::Adventurous => ADVENTUROUS_KEYWORDS,
            Mood::Cultural => CULTURAL_KEYWORDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Relaxed => "Relaxed",
            Mood::Adventurous => "Adventurous",
            Mood::Cultural => "Cultural",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown mood: {0}")]
pub struct UnknownMood(String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Mood::Relaxed),
            "adventurous" => Ok(Mood::Adventurous),
            "cultural" => Ok(Mood::Cultural),
            _ => Err(UnknownMood(s.to_string())),
        }
    }
}

// Accepts "cultural" from query strings as well as "Cultural" from the app.
impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
