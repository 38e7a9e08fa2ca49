use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::duration::format_employment_duration;
use crate::entities::validation::{
    clean_text, field_validation_error, new_validation_error, validate_date_order, validate_not_blank,
};

const MAX_SKILLS: usize = 20;
const MAX_SKILL_LENGTH: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmploymentInformation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub position: String,
    pub company: String,
    pub sector: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EmploymentInformationInsert {
    pub user_id: Uuid,
    pub position: String,
    pub company: String,
    pub sector: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmploymentInformationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub position: String,
    pub company: String,
    pub sector: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub duration: String,
    pub updated_at: DateTime<Utc>,
}

impl EmploymentInformation {
    pub fn into_response(self, today: NaiveDate) -> EmploymentInformationResponse {
        let duration = format_employment_duration(self.start_date, self.end_date, self.is_current, today);
        EmploymentInformationResponse {
            id: self.id,
            user_id: self.user_id,
            position: self.position,
            company: self.company,
            sector: self.sector,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            hard_skills: self.hard_skills,
            soft_skills: self.soft_skills,
            duration,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_employment_request", skip_on_field_errors = false))]
pub struct EmploymentInformationRequest {
    #[validate(
        length(min = 2, max = 150, message = "Position must be between 2 and 150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub position: String,

    #[validate(
        length(min = 2, max = 150, message = "Company must be between 2 and 150 characters"),
        custom(function = "validate_not_blank")
    )]
    pub company: String,

    #[validate(length(max = 100))]
    pub sector: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub hard_skills: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub soft_skills: Vec<String>,
}

fn validate_employment_request(request: &EmploymentInformationRequest) -> Result<(), ValidationError> {
    if request.is_current && request.end_date.is_some() {
        return Err(field_validation_error(
            "current_with_end_date",
            "end_date",
            "A current position cannot have an end date",
        ));
    }
    validate_date_order(request.start_date, request.end_date)
}

fn validate_skills(skills: &[String]) -> Result<(), ValidationError> {
    if skills.len() > MAX_SKILLS {
        return Err(new_validation_error("too_many_skills", "Too many skills provided"));
    }
    if skills.iter().any(|s| s.trim().is_empty() || s.len() > MAX_SKILL_LENGTH) {
        return Err(new_validation_error("invalid_skill_length", "Skill length must be within allowed range"));
    }
    Ok(())
}

/// Trims tags and drops case-insensitive duplicates, keeping the first spelling.
fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}

impl EmploymentInformationRequest {
    pub fn prepare_for_insert(self, user_id: Uuid) -> EmploymentInformationInsert {
        EmploymentInformationInsert {
            user_id,
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            sector: clean_text(self.sector),
            start_date: self.start_date,
            end_date: if self.is_current { None } else { self.end_date },
            is_current: self.is_current,
            hard_skills: normalize_skills(self.hard_skills),
            soft_skills: normalize_skills(self.soft_skills),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmploymentInformationRequest {
        EmploymentInformationRequest {
            position: "Desarrolladora backend".into(),
            company: "Bancolombia".into(),
            sector: Some("Financiero".into()),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2022, 3, 1),
            is_current: false,
            hard_skills: vec!["Rust".into(), " rust ".into(), "SQL".into()],
            soft_skills: vec!["Liderazgo".into()],
        }
    }

    #[test]
    fn current_job_cannot_have_end_date() {
        let mut r = request();
        r.is_current = true;
        assert!(r.validate().is_err());

        r.end_date = None;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn blank_skills_are_rejected() {
        let mut r = request();
        r.soft_skills.push("  ".into());
        assert!(r.validate().is_err());
    }

    #[test]
    fn skills_are_deduplicated_case_insensitively() {
        let insert = request().prepare_for_insert(Uuid::new_v4());
        assert_eq!(insert.hard_skills, vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn response_carries_formatted_duration() {
        let insert = request().prepare_for_insert(Uuid::new_v4());
        let now = Utc::now();
        let record = EmploymentInformation {
            id: Uuid::new_v4(),
            user_id: insert.user_id,
            position: insert.position,
            company: insert.company,
            sector: insert.sector,
            start_date: insert.start_date,
            end_date: insert.end_date,
            is_current: insert.is_current,
            hard_skills: insert.hard_skills,
            soft_skills: insert.soft_skills,
            created_at: now,
            updated_at: now,
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(record.into_response(today).duration, "2 años y 2 meses");
    }
}
