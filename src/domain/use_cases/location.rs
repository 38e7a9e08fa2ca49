use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::geocoding::resolve_place_name,
    entities::location::{Location, MapMarker, NewLocationRequest},
    errors::AppError,
    repositories::{geocoder::ReverseGeocoder, location::LocationRepository},
};

pub struct LocationHandler<R, G>
where
    R: LocationRepository,
    G: ReverseGeocoder,
{
    pub repo: R,
    pub geocoder: G,
}

impl<R, G> LocationHandler<R, G>
where
    R: LocationRepository,
    G: ReverseGeocoder,
{
    pub fn new(repo: R, geocoder: G) -> Self {
        LocationHandler { repo, geocoder }
    }

    pub async fn record(&self, user_id: &Uuid, request: NewLocationRequest) -> Result<Location, AppError> {
        request.validate()?;
        self.repo.record(&request.prepare_for_insert(*user_id)).await
    }

    pub async fn latest_own(&self, user_id: &Uuid) -> Result<Option<Location>, AppError> {
        self.repo.latest_for_user(user_id).await
    }

    /// One marker per graduate with a shared location.
    ///
    /// Lookups run one after another so the geocoder's pacing delay applies
    /// between consecutive requests. A failed lookup only degrades the label.
    ///
    /// Latency grows linearly: with the default 1000-1500 ms delay, N markers
    /// take roughly N x 1.25 s plus the geocoder's own response time.
    pub async fn map(&self) -> Result<Vec<MapMarker>, AppError> {
        let locations = self.repo.latest_per_graduate().await?;
        let mut markers = Vec::with_capacity(locations.len());

        for location in locations {
            let lookup = self.geocoder.reverse(location.latitude, location.longitude).await;
            if let Err(e) = &lookup {
                tracing::warn!(
                    user_id = %location.user_id,
                    error = %e,
                    "Reverse geocoding failed, using fallback label"
                );
            }

            let place_name = resolve_place_name(
                lookup.ok().as_ref(),
                location.address.as_deref(),
                location.latitude,
                location.longitude,
            );

            markers.push(MapMarker {
                user_id: location.user_id,
                name: location.name,
                career: location.career,
                institution: location.institution,
                latitude: location.latitude,
                longitude: location.longitude,
                place_name,
                recorded_at: location.recorded_at,
            });
        }

        Ok(markers)
    }
}
