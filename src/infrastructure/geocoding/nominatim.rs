use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;

use crate::{
    domain::geocoding::ReverseGeocodeResponse,
    errors::GeocodingError,
    repositories::geocoder::ReverseGeocoder,
    settings::AppConfig,
};

/// Reverse geocoder backed by a Nominatim instance.
///
/// Every call first sleeps a random delay in `[min_delay, max_delay]` so that
/// sequential lookups stay within the service's rate limit.
#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl NominatimClient {
    pub fn new(config: &AppConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .user_agent(config.geocoding_user_agent.clone())
            .timeout(config.geocoding_timeout())
            .build()?;

        Ok(NominatimClient {
            client,
            base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
            min_delay_ms: config.geocoding_min_delay_ms,
            max_delay_ms: config.geocoding_max_delay_ms.max(config.geocoding_min_delay_ms),
        })
    }

    fn pacing_delay(&self) -> Duration {
        let millis = if self.max_delay_ms > self.min_delay_ms {
            rand::thread_rng().gen_range(self.min_delay_ms..=self.max_delay_ms)
        } else {
            self.min_delay_ms
        };
        Duration::from_millis(millis)
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseGeocodeResponse, GeocodingError> {
        let delay = self.pacing_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, latitude, longitude, "Reverse geocoding rejected");
            return Err(GeocodingError::Status(status.as_u16()));
        }

        response
            .json::<ReverseGeocodeResponse>()
            .await
            .map_err(|e| GeocodingError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::test_config;

    #[test]
    fn delay_stays_within_bounds() {
        let mut config = test_config();
        config.geocoding_min_delay_ms = 1000;
        config.geocoding_max_delay_ms = 1500;
        let client = NominatimClient::new(&config).unwrap();

        for _ in 0..50 {
            let delay = client.pacing_delay();
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay <= Duration::from_millis(1500));
        }
    }

    #[test]
    fn equal_bounds_give_fixed_delay() {
        let client = NominatimClient::new(&test_config()).unwrap();
        assert_eq!(client.pacing_delay(), Duration::ZERO);
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let client = NominatimClient::new(&test_config()).unwrap();
        assert!(client.reverse(6.2442, -75.5812).await.is_err());
    }
}
