use crate::utils::error::{Result, VenueError};
use std::fmt;
use std::str::FromStr;

/// Guest-count range filter, closed (`100-300`) or open-ended (`500+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBracket {
    pub min: u32,
    pub max: Option<u32>,
}

impl CapacityBracket {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Blank input means "no capacity filter".
    pub fn parse_optional(input: &str) -> Result<Option<Self>> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        input.parse().map(Some)
    }

    pub fn contains(&self, capacity: u32) -> bool {
        capacity >= self.min && self.max.map_or(true, |max| capacity <= max)
    }
}

fn parse_bound(raw: &str, input: &str) -> Result<u32> {
    let digits = raw.trim().trim_end_matches('+').trim();
    digits
        .parse::<u32>()
        .map_err(|_| VenueError::InvalidCapacityBracket {
            value: input.to_string(),
            reason: format!("'{}' is not a whole number of guests", raw.trim()),
        })
}

impl FromStr for CapacityBracket {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.is_empty() {
            return Err(VenueError::InvalidCapacityBracket {
                value: s.to_string(),
                reason: "bracket is empty".to_string(),
            });
        }

        let mut parts = input.split('-');
        let min = parse_bound(parts.next().unwrap_or_default(), s)?;
        let max = match parts.next().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_bound(raw, s)?),
        };

        if parts.next().is_some() {
            return Err(VenueError::InvalidCapacityBracket {
                value: s.to_string(),
                reason: "expected 'min-max' or 'min+'".to_string(),
            });
        }

        if let Some(max) = max {
            if max < min {
                return Err(VenueError::InvalidCapacityBracket {
                    value: s.to_string(),
                    reason: format!("upper bound {} is below lower bound {}", max, min),
                });
            }
        }

        Ok(Self { min, max })
    }
}

impl fmt::Display for CapacityBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}
