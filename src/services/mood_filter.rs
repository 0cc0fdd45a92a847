// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Keyword filter narrowing activities to a mood.

use crate::models::{Activity, Mood};

/// Keep activities whose description mentions one of the mood's keywords.
///
/// With no mood the list is returned unchanged. Matching is plain
/// case-insensitive substring containment, so "art" also matches "heart".
/// Activities without a description never match.
pub fn filter_by_mood(activities: Vec<Activity>, mood: Option<Mood>) -> Vec<Activity> {
    let Some(mood) = mood else {
        return activities;
    };

    activities
        .into_iter()
        .filter(|activity| matches_mood(activity, mood))
        .collect()
}

/// Whether one activity's description matches the mood.
pub fn matches_mood(activity: &Activity, mood: Mood) -> bool {
    let Some(description) = activity.short_description.as_deref() else {
        return false;
    };
    let description = description.to_lowercase();
    mood.keywords()
        .iter()
        .any(|keyword| description.contains(keyword))
}
