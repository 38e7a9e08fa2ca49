use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::validation::{clean_text, validate_date_order, validate_not_blank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "academic_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AcademicType {
    /// Degree programmes (undergraduate, specialization, master, doctorate).
    Formal,
    /// Courses, diplomas and certifications.
    Course,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AcademicInformation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_type: AcademicType,
    pub level: Option<String>,
    pub program: String,
    pub institution: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Filename of the stored certificate, if any.
    pub certificate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AcademicInformationInsert {
    pub user_id: Uuid,
    pub academic_type: AcademicType,
    pub level: Option<String>,
    pub program: String,
    pub institution: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub certificate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_academic_request", skip_on_field_errors = false))]
pub struct AcademicInformationRequest {
    pub academic_type: AcademicType,

    #[validate(length(max = 80))]
    pub level: Option<String>,

    #[validate(
        length(min = 2, max = 200, message = "Program must be between 2 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub program: String,

    #[validate(
        length(min = 2, max = 200, message = "Institution must be between 2 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub institution: String,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub certificate: Option<String>,
}

fn validate_academic_request(request: &AcademicInformationRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)
}

impl AcademicInformationRequest {
    pub fn prepare_for_insert(self, user_id: Uuid) -> AcademicInformationInsert {
        AcademicInformationInsert {
            user_id,
            academic_type: self.academic_type,
            level: clean_text(self.level),
            program: self.program.trim().to_string(),
            institution: self.institution.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            certificate: clean_text(self.certificate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AcademicInformationRequest {
        AcademicInformationRequest {
            academic_type: AcademicType::Formal,
            level: Some("Pregrado".into()),
            program: "Ingeniería de Sistemas".into(),
            institution: "Universidad de Antioquia".into(),
            start_date: NaiveDate::from_ymd_opt(2015, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 15),
            certificate: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut r = request();
        r.end_date = NaiveDate::from_ymd_opt(2014, 1, 1);
        assert!(r.validate().is_err());
    }

    #[test]
    fn type_flag_uses_lowercase_names() {
        let r: AcademicInformationRequest = serde_json::from_value(serde_json::json!({
            "academic_type": "course",
            "program": "Diplomado en Analítica",
            "institution": "SENA",
            "start_date": null,
            "end_date": null,
            "level": null,
            "certificate": "cert-123.pdf"
        }))
        .unwrap();
        assert_eq!(r.academic_type, AcademicType::Course);
        assert_eq!(r.prepare_for_insert(Uuid::new_v4()).certificate.as_deref(), Some("cert-123.pdf"));
    }
}
