use crate::core::filter;
use crate::domain::catalog::VenueCatalog;
use crate::domain::model::{Availability, GeocodedPlace, SearchMode, SearchQuery, Venue};
use crate::domain::ports::Geocoder;

/// 地理編碼結果的 id 起點，避開範例目錄的 1-4
pub const DEFAULT_LOOKUP_ID_OFFSET: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub lookup_id_offset: u32,
    /// Geocoded venues are exempt from the capacity bracket unless this is set.
    pub apply_capacity_to_lookup: bool,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            lookup_id_offset: DEFAULT_LOOKUP_ID_OFFSET,
            apply_capacity_to_lookup: false,
        }
    }
}

/// Maps a geocoded place into a venue-shaped record with fixed placeholder details.
pub fn geocoded_venue(place: &GeocodedPlace, id: u32) -> Venue {
    Venue {
        id,
        name: place.short_name().to_string(),
        location: place.display_name.clone(),
        venue_type: "general".to_string(),
        capacity: 100,
        price: "Contact for price".to_string(),
        features: vec!["Parking".to_string(), "Accessible".to_string()],
        rating: 4.0,
        availability: Availability::Available,
        lat: place.lat.as_f64(),
        lon: place.lon.as_f64(),
        booked_dates: Vec::new(),
    }
}

pub struct SearchEngine<G: Geocoder> {
    catalog: VenueCatalog,
    geocoder: G,
    policy: SearchPolicy,
}

impl<G: Geocoder> SearchEngine<G> {
    pub fn new(catalog: VenueCatalog, geocoder: G, policy: SearchPolicy) -> Self {
        Self {
            catalog,
            geocoder,
            policy,
        }
    }

    pub fn catalog(&self) -> &VenueCatalog {
        &self.catalog
    }

    /// Resolves a query into a fresh result list. Never fails: lookup errors
    /// degrade to an empty list.
    pub async fn search(&self, query: &SearchQuery) -> Vec<Venue> {
        let term = query.trimmed_term();

        if query.mode == SearchMode::Location && !term.is_empty() {
            let venues = self.lookup_venues(term).await;
            if self.policy.apply_capacity_to_lookup {
                return filter::apply_capacity(venues, query.capacity.as_ref());
            }
            return venues;
        }

        let venues = filter::filter_catalog(self.catalog.all(), query);
        tracing::debug!(
            "Local {} search for '{}' matched {} of {} venues",
            query.mode,
            term,
            venues.len(),
            self.catalog.len()
        );
        venues
    }

    async fn lookup_venues(&self, term: &str) -> Vec<Venue> {
        match self.geocoder.lookup(term).await {
            Ok(places) => {
                tracing::debug!("📍 Geocoder returned {} places for '{}'", places.len(), term);
                // ids past u32::MAX are dropped, the response is untrusted
                places
                    .iter()
                    .enumerate()
                    .map_while(|(index, place)| {
                        let id = u32::try_from(index)
                            .ok()
                            .and_then(|i| self.policy.lookup_id_offset.checked_add(i))?;
                        Some(geocoded_venue(place, id))
                    })
                    .collect()
            }
            Err(e) => {
                tracing::warn!(
                    "Location lookup failed for '{}' via {}, showing no venues: {}",
                    term,
                    self.geocoder.endpoint(),
                    e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Coordinate;
    use crate::utils::error::{Result, VenueError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticGeocoder {
        places: Vec<GeocodedPlace>,
        calls: AtomicUsize,
    }

    impl StaticGeocoder {
        fn new(names: &[&str]) -> Self {
            let places = names
                .iter()
                .map(|name| GeocodedPlace {
                    display_name: name.to_string(),
                    lat: Coordinate::Text("-1.94".to_string()),
                    lon: Coordinate::Text("30.06".to_string()),
                })
                .collect();
            Self {
                places,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Geocoder for StaticGeocoder {
        async fn lookup(&self, _term: &str) -> Result<Vec<GeocodedPlace>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.places.clone())
        }

        fn endpoint(&self) -> &str {
            "static"
        }
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn lookup(&self, _term: &str) -> Result<Vec<GeocodedPlace>> {
            Err(VenueError::ConfigError {
                message: "offline".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "failing"
        }
    }

    fn engine<G: Geocoder>(geocoder: G, policy: SearchPolicy) -> SearchEngine<G> {
        SearchEngine::new(VenueCatalog::sample(), geocoder, policy)
    }

    #[tokio::test]
    async fn test_location_search_maps_places() {
        let engine = engine(
            StaticGeocoder::new(&["Kimihurura, Gasabo, Kigali, Rwanda", "Remera, Gasabo, Rwanda"]),
            SearchPolicy::default(),
        );

        let venues = engine
            .search(&SearchQuery::new(SearchMode::Location, "  Kigali "))
            .await;

        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].id, 100);
        assert_eq!(venues[1].id, 101);
        assert_eq!(venues[0].name, "Kimihurura");
        assert_eq!(venues[0].location, "Kimihurura, Gasabo, Kigali, Rwanda");
        assert_eq!(venues[0].venue_type, "general");
        assert_eq!(venues[0].capacity, 100);
        assert_eq!(venues[0].features, vec!["Parking", "Accessible"]);
        assert_eq!(venues[0].availability, Availability::Available);
        assert_eq!(venues[0].lat, Some(-1.94));
    }

    #[tokio::test]
    async fn test_capacity_not_applied_to_lookup_by_default() {
        let engine = engine(StaticGeocoder::new(&["Kigali, Rwanda"]), SearchPolicy::default());
        let query = SearchQuery::new(SearchMode::Location, "Kigali")
            .with_capacity("500+".parse().unwrap());

        assert_eq!(engine.search(&query).await.len(), 1);
    }

    #[tokio::test]
    async fn test_capacity_applied_to_lookup_when_configured() {
        let policy = SearchPolicy {
            apply_capacity_to_lookup: true,
            ..SearchPolicy::default()
        };
        let engine = engine(StaticGeocoder::new(&["Kigali, Rwanda"]), policy);

        let too_big = SearchQuery::new(SearchMode::Location, "Kigali")
            .with_capacity("500+".parse().unwrap());
        assert!(engine.search(&too_big).await.is_empty());

        let fits = SearchQuery::new(SearchMode::Location, "Kigali")
            .with_capacity("50-150".parse().unwrap());
        assert_eq!(engine.search(&fits).await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_location_term_filters_catalog_locally() {
        let geocoder = StaticGeocoder::new(&["Nowhere"]);
        let engine = engine(geocoder, SearchPolicy::default());
        let query = SearchQuery::new(SearchMode::Location, "")
            .with_capacity("100-300".parse().unwrap());

        let venues = engine.search(&query).await;
        assert_eq!(venues.len(), 3);
        assert_eq!(engine.geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_yields_empty_list() {
        let engine = engine(FailingGeocoder, SearchPolicy::default());
        let venues = engine
            .search(&SearchQuery::new(SearchMode::Location, "Kigali"))
            .await;
        assert!(venues.is_empty());
    }

    #[tokio::test]
    async fn test_id_offset_near_max_drops_overflowing_places() {
        let policy = SearchPolicy {
            lookup_id_offset: u32::MAX - 5,
            ..SearchPolicy::default()
        };
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let engine = engine(StaticGeocoder::new(&names), policy);

        let ids: Vec<u32> = engine
            .search(&SearchQuery::new(SearchMode::Location, "x"))
            .await
            .iter()
            .map(|v| v.id)
            .collect();

        assert_eq!(ids.len(), 6);
        assert_eq!(ids.first(), Some(&(u32::MAX - 5)));
        assert_eq!(ids.last(), Some(&u32::MAX));
    }

    #[tokio::test]
    async fn test_custom_id_offset() {
        let policy = SearchPolicy {
            lookup_id_offset: 1000,
            ..SearchPolicy::default()
        };
        let engine = engine(StaticGeocoder::new(&["A", "B", "C"]), policy);
        let ids: Vec<u32> = engine
            .search(&SearchQuery::new(SearchMode::Location, "x"))
            .await
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1000, 1001, 1002]);
    }
}
