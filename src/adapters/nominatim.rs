use crate::config::toml_config::GeocoderSettings;
use crate::domain::model::GeocodedPlace;
use crate::domain::ports::Geocoder;
use crate::utils::error::{Result, VenueError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Address search against a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
    limit: u32,
}

impl NominatimGeocoder {
    pub fn new(settings: &GeocoderSettings) -> Result<Self> {
        // Nominatim 的使用政策要求帶上識別用的 User-Agent
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, settings.endpoint.clone(), settings.limit))
    }

    pub fn with_client(client: Client, endpoint: String, limit: u32) -> Self {
        Self {
            client,
            endpoint,
            limit,
        }
    }

    fn lookup_failure(&self, source: reqwest::Error) -> VenueError {
        VenueError::ExternalLookupFailure {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn lookup(&self, term: &str) -> Result<Vec<GeocodedPlace>> {
        let limit = self.limit.to_string();
        tracing::debug!("Making geocoder request to: {} (q={})", self.endpoint, term);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "json"),
                ("q", term),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| self.lookup_failure(e))?;

        tracing::debug!("Geocoder response status: {}", response.status());

        let mut places: Vec<GeocodedPlace> =
            response.json().await.map_err(|e| self.lookup_failure(e))?;
        // 伺服器不一定遵守 limit 參數
        places.truncate(usize::try_from(self.limit).unwrap_or(usize::MAX));
        Ok(places)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
