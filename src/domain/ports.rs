use crate::domain::model::GeocodedPlace;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Free-text address lookup used by the location search path.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<Vec<GeocodedPlace>>;

    /// Endpoint label used in diagnostics.
    fn endpoint(&self) -> &str;
}
