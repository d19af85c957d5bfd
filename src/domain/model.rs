use crate::domain::capacity::CapacityBracket;
use crate::utils::error::VenueError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Booked,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// convention | garden | hall | cultural | general
    #[serde(rename = "type")]
    pub venue_type: String,
    pub capacity: u32,
    /// 自由格式的價格描述，不做數值解析
    pub price: String,
    pub features: Vec<String>,
    pub rating: f32,
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booked_dates: Vec<NaiveDate>,
}

impl Venue {
    pub fn is_booked_on(&self, date: NaiveDate) -> bool {
        self.booked_dates.contains(&date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Location,
    Name,
    Type,
    Date,
}

impl FromStr for SearchMode {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "location" => Ok(SearchMode::Location),
            "name" => Ok(SearchMode::Name),
            "type" => Ok(SearchMode::Type),
            "date" => Ok(SearchMode::Date),
            _ => Err(VenueError::InvalidSearchMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Location => "location",
            SearchMode::Name => "name",
            SearchMode::Type => "type",
            SearchMode::Date => "date",
        };
        f.write_str(name)
    }
}

/// 一次搜尋提交的快照
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub term: String,
    pub capacity: Option<CapacityBracket>,
}

impl SearchQuery {
    pub fn new(mode: SearchMode, term: impl Into<String>) -> Self {
        Self {
            mode,
            term: term.into(),
            capacity: None,
        }
    }

    pub fn with_capacity(mut self, capacity: CapacityBracket) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn trimmed_term(&self) -> &str {
        self.term.trim()
    }
}

/// Nominatim returns coordinates as decimal strings; some mirrors send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Text(text) => text.trim().parse().ok(),
            Coordinate::Number(value) => Some(*value),
        }
    }
}

/// A single place returned by the address-search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodedPlace {
    pub display_name: String,
    pub lat: Coordinate,
    pub lon: Coordinate,
}

impl GeocodedPlace {
    /// First comma-delimited segment of the display name.
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }
}
