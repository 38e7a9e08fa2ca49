use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::employment_information::{EmploymentInformation, EmploymentInformationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxEmploymentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmploymentRepository: Send + Sync {
    async fn create(&self, record: &EmploymentInformationInsert) -> Result<EmploymentInformation, AppError>;
    async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<EmploymentInformation>, AppError>;
    async fn update(&self, id: &Uuid, record: &EmploymentInformationInsert) -> Result<EmploymentInformation, AppError>;
    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxEmploymentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxEmploymentRepo { pool }
    }
}

#[async_trait]
impl EmploymentRepository for SqlxEmploymentRepo {
    async fn create(&self, record: &EmploymentInformationInsert) -> Result<EmploymentInformation, AppError> {
        let stored = sqlx::query_as::<_, EmploymentInformation>(
            r#"
            INSERT INTO employment_information (
                user_id, position, company, sector, start_date, end_date, is_current,
                hard_skills, soft_skills
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(record.user_id)
        .bind(&record.position)
        .bind(&record.company)
        .bind(&record.sector)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.is_current)
        .bind(&record.hard_skills)
        .bind(&record.soft_skills)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_by_user(&self, user_id: &Uuid) -> Result<Vec<EmploymentInformation>, AppError> {
        let rows = sqlx::query_as::<_, EmploymentInformation>(
            r#"
            SELECT * FROM employment_information
            WHERE user_id = $1
            ORDER BY is_current DESC, start_date DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update(&self, id: &Uuid, record: &EmploymentInformationInsert) -> Result<EmploymentInformation, AppError> {
        sqlx::query_as::<_, EmploymentInformation>(
            r#"
            UPDATE employment_information SET
                position = $1,
                company = $2,
                sector = $3,
                start_date = $4,
                end_date = $5,
                is_current = $6,
                hard_skills = $7,
                soft_skills = $8,
                updated_at = NOW()
            WHERE id = $9 AND user_id = $10
            RETURNING *
            "#,
        )
        .bind(&record.position)
        .bind(&record.company)
        .bind(&record.sector)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.is_current)
        .bind(&record.hard_skills)
        .bind(&record.soft_skills)
        .bind(id)
        .bind(record.user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Employment record not found".to_string()))
    }

    async fn delete(&self, id: &Uuid, user_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employment_information WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employment record not found".to_string()));
        }

        Ok(())
    }
}
