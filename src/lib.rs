pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::NominatimGeocoder;
pub use crate::app::{SearchController, SearchOutcome};
pub use crate::config::AppConfig;
pub use crate::core::engine::{SearchEngine, SearchPolicy};
pub use crate::domain::{
    capacity::CapacityBracket,
    catalog::VenueCatalog,
    model::{Availability, SearchMode, SearchQuery, Venue},
};
pub use crate::utils::error::{Result, VenueError};
