use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::academic_information::{AcademicInformation, AcademicInformationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxAcademicRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcademicRepository: Send + Sync {
    async fn create(&self, record: &AcademicInformationInsert) -> Result<AcademicInformation, AppError>;
    async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<AcademicInformation>, AppError>;
    /// Rows owned by someone else are reported as `NotFound`.
    async fn update(&self, id: &Uuid, record: &AcademicInformationInsert) -> Result<AcademicInformation, AppError>;
    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxAcademicRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxAcademicRepo { pool }
    }
}

#[async_trait]
impl AcademicRepository for SqlxAcademicRepo {
    async fn create(&self, record: &AcademicInformationInsert) -> Result<AcademicInformation, AppError> {
        let stored = sqlx::query_as::<_, AcademicInformation>(
            r#"
            INSERT INTO academic_information (
                user_id, academic_type, level, program, institution, start_date, end_date, certificate
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(record.user_id)
        .bind(record.academic_type)
        .bind(&record.level)
        .bind(&record.program)
        .bind(&record.institution)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(&record.certificate)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<AcademicInformation>, AppError> {
        let rows = sqlx::query_as::<_, AcademicInformation>(
            r#"
            SELECT * FROM academic_information
            WHERE user_id = $1
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update(&self, id: &Uuid, record: &AcademicInformationInsert) -> Result<AcademicInformation, AppError> {
        sqlx::query_as::<_, AcademicInformation>(
            r#"
            UPDATE academic_information SET
                academic_type = $1,
                level = $2,
                program = $3,
                institution = $4,
                start_date = $5,
                end_date = $6,
                certificate = $7,
                updated_at = NOW()
            WHERE id = $8 AND user_id = $9
            RETURNING *
            "#,
        )
        .bind(record.academic_type)
        .bind(&record.level)
        .bind(&record.program)
        .bind(&record.institution)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(&record.certificate)
        .bind(id)
        .bind(record.user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Academic record not found".to_string()))
    }

    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM academic_information WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Academic record not found".to_string()));
        }

        Ok(())
    }
}
