use crate::domain::capacity::CapacityBracket;
use crate::domain::model::{SearchMode, SearchQuery, Venue};
use chrono::NaiveDate;

/// 日期搜尋欄位送出的格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Mode-specific predicate over a local catalog venue. An empty term matches everything.
pub fn matches_term(venue: &Venue, mode: SearchMode, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    match mode {
        SearchMode::Name => contains_ignore_case(&venue.name, term),
        SearchMode::Type => contains_ignore_case(&venue.venue_type, term),
        SearchMode::Date => match NaiveDate::parse_from_str(term, DATE_FORMAT) {
            Ok(date) => !venue.is_booked_on(date),
            // 無法解析的日期不做過濾
            Err(_) => true,
        },
        // location terms are resolved by the geocoder, never against the catalog
        SearchMode::Location => true,
    }
}

pub fn matches_capacity(venue: &Venue, capacity: Option<&CapacityBracket>) -> bool {
    capacity.map_or(true, |bracket| bracket.contains(venue.capacity))
}

/// Filters the catalog by the query's mode predicate ANDed with its capacity bracket.
pub fn filter_catalog(venues: &[Venue], query: &SearchQuery) -> Vec<Venue> {
    let term = query.trimmed_term();
    venues
        .iter()
        .filter(|venue| matches_term(venue, query.mode, term))
        .filter(|venue| matches_capacity(venue, query.capacity.as_ref()))
        .cloned()
        .collect()
}

pub fn apply_capacity(venues: Vec<Venue>, capacity: Option<&CapacityBracket>) -> Vec<Venue> {
    venues
        .into_iter()
        .filter(|venue| matches_capacity(venue, capacity))
        .collect()
}
