// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Shared helpers for date/time handling.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Expiry of a credential granted at `granted_at` that lives
/// `expires_in_secs` seconds. Negative lifetimes count as already expired;
/// lifetimes past chrono's range saturate at `DateTime::<Utc>::MAX_UTC`.
pub fn expiry_after(granted_at: DateTime<Utc>, expires_in_secs: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(expires_in_secs.max(0))
        .and_then(|lifetime| granted_at.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
