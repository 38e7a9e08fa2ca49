use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::report::GraduateRecord,
    errors::AppError,
    repositories::sqlx_repo::SqlxReportRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// One flattened record per active graduate, unfiltered.
    async fn graduate_records(&self) -> Result<Vec<GraduateRecord>, AppError>;
}

impl SqlxReportRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxReportRepo { pool }
    }
}

#[async_trait]
impl ReportRepository for SqlxReportRepo {
    async fn graduate_records(&self) -> Result<Vec<GraduateRecord>, AppError> {
        let rows = sqlx::query_as::<_, GraduateRecord>(
            r#"
            SELECT
                u.id AS user_id,
                b.gender,
                b.city,
                b.department,
                b.institution,
                b.career,
                b.graduation_year,
                acad.level AS academic_level,
                job.sector,
                job.company AS employer,
                COALESCE(skills.tags, ARRAY[]::TEXT[]) AS skills,
                EXISTS (SELECT 1 FROM academic_information a WHERE a.user_id = u.id) AS has_academic,
                EXISTS (SELECT 1 FROM employment_information e WHERE e.user_id = u.id) AS has_employment
            FROM users u
            LEFT JOIN basic_information b ON b.user_id = u.id
            LEFT JOIN LATERAL (
                SELECT a.level
                FROM academic_information a
                WHERE a.user_id = u.id AND a.academic_type = 'formal'
                ORDER BY a.end_date DESC NULLS FIRST, a.start_date DESC NULLS LAST
                LIMIT 1
            ) acad ON TRUE
            LEFT JOIN LATERAL (
                SELECT e.sector, e.company
                FROM employment_information e
                WHERE e.user_id = u.id
                ORDER BY e.is_current DESC, e.start_date DESC NULLS LAST
                LIMIT 1
            ) job ON TRUE
            LEFT JOIN LATERAL (
                SELECT ARRAY_AGG(DISTINCT tag) AS tags
                FROM employment_information e,
                     UNNEST(e.hard_skills || e.soft_skills) AS tag
                WHERE e.user_id = u.id
            ) skills ON TRUE
            WHERE u.role = 'graduate' AND u.deleted_at IS NULL
            ORDER BY u.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
