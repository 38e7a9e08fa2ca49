use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::completion::{completion_percentage, FieldPresence};
use crate::entities::validation::{
    clean_text, validate_document_number, validate_not_blank, validate_phone, validate_url,
};

pub const REQUIRED_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "document_type",
    "document_number",
    "gender",
    "phone",
    "career",
    "institution",
    "graduation_year",
];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "birth_date",
    "address",
    "city",
    "department",
    "linkedin_url",
];

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BasicInformation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub career: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<i32>,
    pub linkedin_url: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BasicInformationUpsert {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub career: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<i32>,
    pub linkedin_url: Option<String>,
    pub photo: Option<String>,
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl FieldPresence for BasicInformation {
    fn is_filled(&self, field: &str) -> bool {
        match field {
            "first_name" => !self.first_name.trim().is_empty(),
            "last_name" => !self.last_name.trim().is_empty(),
            "document_type" => is_present(&self.document_type),
            "document_number" => is_present(&self.document_number),
            "gender" => is_present(&self.gender),
            "birth_date" => self.birth_date.is_some(),
            "phone" => is_present(&self.phone),
            "address" => is_present(&self.address),
            "city" => is_present(&self.city),
            "department" => is_present(&self.department),
            "career" => is_present(&self.career),
            "institution" => is_present(&self.institution),
            "graduation_year" => self.graduation_year.is_some(),
            "linkedin_url" => is_present(&self.linkedin_url),
            "photo" => is_present(&self.photo),
            _ => false,
        }
    }
}

impl BasicInformation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn completion(&self) -> u8 {
        completion_percentage(self, REQUIRED_FIELDS, OPTIONAL_FIELDS, is_present(&self.photo))
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct BasicInformationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub career: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<i32>,
    pub linkedin_url: Option<String>,
    pub photo: Option<String>,
    pub completion: u8,
    pub updated_at: DateTime<Utc>,
}

impl From<BasicInformation> for BasicInformationResponse {
    fn from(info: BasicInformation) -> Self {
        let completion = info.completion();
        let full_name = info.full_name();
        BasicInformationResponse {
            id: info.id,
            user_id: info.user_id,
            full_name,
            first_name: info.first_name,
            last_name: info.last_name,
            document_type: info.document_type,
            document_number: info.document_number,
            gender: info.gender,
            birth_date: info.birth_date,
            phone: info.phone,
            address: info.address,
            city: info.city,
            department: info.department,
            career: info.career,
            institution: info.institution,
            graduation_year: info.graduation_year,
            linkedin_url: info.linkedin_url,
            photo: info.photo,
            completion,
            updated_at: info.updated_at,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BasicInformationRequest {
    #[validate(
        length(min = 1, max = 80, message = "First name must be between 1 and 80 characters"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 80, message = "Last name must be between 1 and 80 characters"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,

    #[validate(length(max = 30))]
    pub document_type: Option<String>,

    #[validate(custom(function = "validate_document_number"))]
    pub document_number: Option<String>,

    #[validate(length(max = 30))]
    pub gender: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    #[validate(length(max = 150))]
    pub career: Option<String>,

    #[validate(length(max = 150))]
    pub institution: Option<String>,

    #[validate(range(min = 1950, max = 2100, message = "Graduation year out of range"))]
    pub graduation_year: Option<i32>,

    #[validate(custom(function = "validate_url"))]
    pub linkedin_url: Option<String>,

    /// Filename of an already stored profile photo.
    #[validate(length(max = 255))]
    pub photo: Option<String>,
}

impl BasicInformationRequest {
    pub fn prepare_for_upsert(self, user_id: Uuid) -> BasicInformationUpsert {
        BasicInformationUpsert {
            user_id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            document_type: clean_text(self.document_type),
            document_number: clean_text(self.document_number),
            gender: clean_text(self.gender),
            birth_date: self.birth_date,
            phone: clean_text(self.phone),
            address: clean_text(self.address),
            city: clean_text(self.city),
            department: clean_text(self.department),
            career: clean_text(self.career),
            institution: clean_text(self.institution),
            graduation_year: self.graduation_year,
            linkedin_url: clean_text(self.linkedin_url),
            photo: clean_text(self.photo),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_basic_information(user_id: Uuid) -> BasicInformation {
    let now = Utc::now();
    BasicInformation {
        id: Uuid::new_v4(),
        user_id,
        first_name: "Laura".into(),
        last_name: "Gómez".into(),
        document_type: Some("CC".into()),
        document_number: Some("1023456789".into()),
        gender: Some("Femenino".into()),
        birth_date: None,
        phone: Some("+57 300 123 4567".into()),
        address: None,
        city: None,
        department: None,
        career: Some("Ingeniería de Sistemas".into()),
        institution: Some("Universidad de Antioquia".into()),
        graduation_year: Some(2021),
        linkedin_url: None,
        photo: None,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_only_profile_scores_seventy() {
        let info = sample_basic_information(Uuid::new_v4());
        assert_eq!(info.completion(), 70);
    }

    #[test]
    fn blank_strings_do_not_count_as_filled() {
        let mut info = sample_basic_information(Uuid::new_v4());
        info.phone = Some("   ".into());
        assert!(!info.is_filled("phone"));
        assert!(info.completion() < 70);
    }

    #[test]
    fn two_thirds_optional_with_photo_is_complete() {
        let mut info = sample_basic_information(Uuid::new_v4());
        info.city = Some("Medellín".into());
        info.department = Some("Antioquia".into());
        info.address = Some("Calle 10 # 20-30".into());
        info.photo = Some("photos/laura.jpg".into());
        assert_eq!(info.completion(), 100);
    }

    #[test]
    fn request_validation_catches_bad_fields() {
        let request = BasicInformationRequest {
            first_name: " ".into(),
            last_name: "Gómez".into(),
            document_type: None,
            document_number: Some("12".into()),
            gender: None,
            birth_date: None,
            phone: None,
            address: None,
            city: None,
            department: None,
            career: None,
            institution: None,
            graduation_year: Some(1800),
            linkedin_url: Some("ftp://linkedin.com/in/laura".into()),
            photo: None,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("document_number"));
        assert!(fields.contains_key("graduation_year"));
        assert!(fields.contains_key("linkedin_url"));
    }

    #[test]
    fn upsert_cleans_blank_text() {
        let request = BasicInformationRequest {
            first_name: " Laura ".into(),
            last_name: "Gómez".into(),
            document_type: Some("".into()),
            document_number: None,
            gender: Some(" Femenino ".into()),
            birth_date: None,
            phone: None,
            address: None,
            city: Some("   ".into()),
            department: None,
            career: None,
            institution: None,
            graduation_year: None,
            linkedin_url: None,
            photo: None,
        };
        let upsert = request.prepare_for_upsert(Uuid::new_v4());
        assert_eq!(upsert.first_name, "Laura");
        assert_eq!(upsert.document_type, None);
        assert_eq!(upsert.gender.as_deref(), Some("Femenino"));
        assert_eq!(upsert.city, None);
    }
}
