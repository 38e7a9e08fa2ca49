use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::{clean_text, validate_phone};

/// Office details of an administrator or coordinator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaffProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StaffProfileUpsert {
    pub user_id: Uuid,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StaffProfileRequest {
    #[validate(length(max = 120))]
    pub position: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 80))]
    pub office: Option<String>,

    #[validate(length(max = 120))]
    pub department: Option<String>,
}

impl StaffProfileRequest {
    pub fn prepare_for_upsert(self, user_id: Uuid) -> StaffProfileUpsert {
        StaffProfileUpsert {
            user_id,
            position: clean_text(self.position),
            phone: clean_text(self.phone),
            office: clean_text(self.office),
            department: clean_text(self.department),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_valid() {
        let request: StaffProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());
        let upsert = request.prepare_for_upsert(Uuid::new_v4());
        assert!(upsert.position.is_none() && upsert.phone.is_none());
    }

    #[test]
    fn phone_is_checked() {
        let request = StaffProfileRequest {
            phone: Some("abc".into()),
            ..Default::default()
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("phone"));
    }
}
