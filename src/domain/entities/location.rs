use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::clean_text;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    /// Address text captured with the consent event, used as lookup fallback.
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LocationInsert {
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewLocationRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(length(max = 255))]
    pub address: Option<String>,
}

impl NewLocationRequest {
    pub fn prepare_for_insert(self, user_id: Uuid) -> LocationInsert {
        LocationInsert {
            user_id,
            latitude: self.latitude,
            longitude: self.longitude,
            address: clean_text(self.address),
        }
    }
}

/// Latest location of a graduate joined with the profile fields the map shows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GraduateLocation {
    pub user_id: Uuid,
    pub name: String,
    pub career: Option<String>,
    pub institution: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MapMarker {
    pub user_id: Uuid,
    pub name: String,
    pub career: Option<String>,
    pub institution: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub place_name: String,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_must_be_in_range() {
        let ok = NewLocationRequest { latitude: 6.2442, longitude: -75.5812, address: None };
        assert!(ok.validate().is_ok());

        let bad = NewLocationRequest { latitude: 91.0, longitude: -181.0, address: None };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("latitude"));
        assert!(errors.field_errors().contains_key("longitude"));
    }
}
