use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Flattened view of one graduate used by the reporting dashboard.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct GraduateRecord {
    pub user_id: Uuid,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub institution: Option<String>,
    pub career: Option<String>,
    pub graduation_year: Option<i32>,
    /// Level of the most recent formal academic record.
    pub academic_level: Option<String>,
    /// Sector of the current (or most recent) job.
    pub sector: Option<String>,
    /// Company of the current (or most recent) job.
    pub employer: Option<String>,
    pub skills: Vec<String>,
    pub has_academic: bool,
    pub has_employment: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(default)]
pub struct ReportFilters {
    #[validate(length(max = 150))]
    pub institution: Option<String>,

    #[validate(length(max = 150))]
    pub career: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    #[validate(range(min = 1950, max = 2100, message = "Graduation year out of range"))]
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distributions {
    pub gender: Vec<Bucket>,
    pub city: Vec<Bucket>,
    pub graduation_year: Vec<Bucket>,
    pub academic_level: Vec<Bucket>,
    pub sector: Vec<Bucket>,
    pub skill: Vec<Bucket>,
    pub employer: Vec<Bucket>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_graduates: u64,
    pub with_academic_info: u64,
    pub with_employment_info: u64,
    pub employment_rate: f64,
    pub most_common_city: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub institutions: Vec<String>,
    pub careers: Vec<String>,
    pub cities: Vec<String>,
    pub departments: Vec<String>,
    pub graduation_years: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduateReport {
    pub filters: ReportFilters,
    pub summary: ReportSummary,
    pub distributions: Distributions,
    pub filter_options: FilterOptions,
}
