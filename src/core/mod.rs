pub mod engine;
pub mod filter;
pub mod session;

pub use crate::domain::catalog::VenueCatalog;
pub use crate::domain::model::{SearchMode, SearchQuery, Venue};
pub use crate::domain::ports::Geocoder;
pub use crate::utils::error::Result;
