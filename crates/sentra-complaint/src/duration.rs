//! Duration extraction from normalized complaint text.
//!
//! An ordered pattern list: the numeric `N <unit>` form first, then
//! relative phrases. The first match wins and absence is a valid outcome.

use std::sync::LazyLock;

use regex::Regex;
use sentra_core::models::{DurationClass, DurationInfo};

static NUMERIC_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(minutes?|mins?|hours?|hrs?|days?|weeks?|wks?|months?|years?|yrs?)\b")
        .expect("numeric duration pattern is valid")
});

/// Relative phrases and their estimated duration in days, checked in order
/// after the numeric pattern. More specific phrases come first so that
/// e.g. "a few days" wins over a later bare-word pattern.
const RELATIVE_PHRASES: &[(&str, f64)] = &[
    ("since yesterday", 1.0),
    ("yesterday", 1.0),
    ("this morning", 0.5),
    ("this evening", 0.25),
    ("tonight", 0.25),
    ("today", 0.5),
    ("a couple of days", 2.0),
    ("couple of days", 2.0),
    ("a few days", 3.0),
    ("several days", 4.0),
    ("a couple of weeks", 14.0),
    ("a few weeks", 21.0),
    ("several weeks", 28.0),
    ("a few months", 90.0),
    ("several months", 120.0),
    ("over a week", 10.0),
    ("about a week", 7.0),
    ("a week", 7.0),
    ("a month", 30.0),
    ("a year", 365.0),
    ("for years", 730.0),
    ("chronic", 365.0),
    ("long time", 180.0),
];

/// Extract duration from normalized text. Returns `None` when no pattern
/// matches — unknown duration is valid.
pub fn extract(normalized: &str) -> Option<DurationInfo> {
    if let Some(caps) = NUMERIC_DURATION.captures(normalized) {
        let raw = caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
        let value: f64 = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(0.0);
        let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let days = value * unit_to_days(unit);
        return Some(DurationInfo {
            raw,
            estimated_days: days,
            class: DurationInfo::classify(days),
        });
    }

    for (phrase, days) in RELATIVE_PHRASES {
        if normalized.contains(phrase) {
            return Some(DurationInfo {
                raw: (*phrase).to_string(),
                estimated_days: *days,
                class: DurationInfo::classify(*days),
            });
        }
    }

    None
}

fn unit_to_days(unit: &str) -> f64 {
    if unit.starts_with("min") {
        1.0 / 1440.0
    } else if unit.starts_with("hour") || unit.starts_with("hr") {
        1.0 / 24.0
    } else if unit.starts_with("day") {
        1.0
    } else if unit.starts_with("week") || unit.starts_with("wk") {
        7.0
    } else if unit.starts_with("month") {
        30.0
    } else if unit.starts_with("year") || unit.starts_with("yr") {
        365.0
    } else {
        0.0
    }
}
