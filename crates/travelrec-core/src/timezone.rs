// crates/travelrec-core/src/timezone.rs

//! Decorative IANA time-zone lookup for known destinations.
//!
//! A fixed table, scanned in order: city entries first, then country
//! fallbacks. Matching is a case-insensitive substring check of the table
//! key against the place text, so "Tokyo Prefecture" still resolves.

use crate::model::Item;
use crate::text::fold_text;

/// Destination text fragment → IANA zone name. Extend as needed.
const TIMEZONE_MAP: &[(&str, &str)] = &[
    // Cities
    ("sydney", "Australia/Sydney"),
    ("melbourne", "Australia/Melbourne"),
    ("tokyo", "Asia/Tokyo"),
    ("kyoto", "Asia/Tokyo"),
    ("new york", "America/New_York"),
    ("toronto", "America/Toronto"),
    // Countries (fallbacks)
    ("australia", "Australia/Sydney"),
    ("japan", "Asia/Tokyo"),
    ("usa", "America/New_York"),
    ("united states", "America/New_York"),
    ("canada", "America/Toronto"),
    ("brazil", "America/Sao_Paulo"),
    ("india", "Asia/Kolkata"),
];

/// Zone for a place name, or `None` when the table has no match.
pub fn zone_for(place: &str) -> Option<&'static str> {
    let key = fold_text(place);
    if key.is_empty() {
        return None;
    }
    TIMEZONE_MAP
        .iter()
        .find(|(fragment, _)| key.contains(fragment))
        .map(|(_, zone)| *zone)
}

/// Zone for an item: the name is tried first, then the owning country.
pub fn zone_for_item(item: &Item) -> Option<&'static str> {
    let place = if item.name.is_empty() {
        item.country.as_str()
    } else {
        item.name.as_str()
    };
    zone_for(place)
}
