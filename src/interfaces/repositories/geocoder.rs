use async_trait::async_trait;

use crate::{domain::geocoding::ReverseGeocodeResponse, errors::GeocodingError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseGeocodeResponse, GeocodingError>;
}
