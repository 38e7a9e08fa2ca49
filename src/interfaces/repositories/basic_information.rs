use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        basic_information::{BasicInformation, BasicInformationUpsert},
        report::ReportFilters,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxBasicInformationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BasicInformationRepository: Send + Sync {
    async fn get_by_user(&self, user_id: &Uuid) -> Result<Option<BasicInformation>, AppError>;
    async fn upsert(&self, info: &BasicInformationUpsert) -> Result<BasicInformation, AppError>;
    async fn list(&self, filters: &ReportFilters) -> Result<Vec<BasicInformation>, AppError>;
}

impl SqlxBasicInformationRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBasicInformationRepo { pool }
    }
}

#[async_trait]
impl BasicInformationRepository for SqlxBasicInformationRepo {
    async fn get_by_user(&self, user_id: &Uuid) -> Result<Option<BasicInformation>, AppError> {
        let info = sqlx::query_as::<_, BasicInformation>(
            "SELECT * FROM basic_information WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(info)
    }

    async fn upsert(&self, info: &BasicInformationUpsert) -> Result<BasicInformation, AppError> {
        let stored = sqlx::query_as::<_, BasicInformation>(
            r#"
            INSERT INTO basic_information (
                user_id, first_name, last_name, document_type, document_number, gender,
                birth_date, phone, address, city, department, career, institution,
                graduation_year, linkedin_url, photo
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (user_id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                document_type = EXCLUDED.document_type,
                document_number = EXCLUDED.document_number,
                gender = EXCLUDED.gender,
                birth_date = EXCLUDED.birth_date,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                department = EXCLUDED.department,
                career = EXCLUDED.career,
                institution = EXCLUDED.institution,
                graduation_year = EXCLUDED.graduation_year,
                linkedin_url = EXCLUDED.linkedin_url,
                photo = EXCLUDED.photo,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(info.user_id)
        .bind(&info.first_name)
        .bind(&info.last_name)
        .bind(&info.document_type)
        .bind(&info.document_number)
        .bind(&info.gender)
        .bind(info.birth_date)
        .bind(&info.phone)
        .bind(&info.address)
        .bind(&info.city)
        .bind(&info.department)
        .bind(&info.career)
        .bind(&info.institution)
        .bind(info.graduation_year)
        .bind(&info.linkedin_url)
        .bind(&info.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list(&self, filters: &ReportFilters) -> Result<Vec<BasicInformation>, AppError> {
        let mut builder = QueryBuilder::new(
            r#"
            SELECT b.* FROM basic_information b
            JOIN users u ON u.id = b.user_id
            WHERE u.deleted_at IS NULL AND u.role = 'graduate'
            "#,
        );

        let text_filters = [
            ("b.institution", &filters.institution),
            ("b.career", &filters.career),
            ("b.city", &filters.city),
            ("b.department", &filters.department),
        ];
        for (column, value) in text_filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                builder
                    .push(format!(" AND LOWER(TRIM({column})) = LOWER("))
                    .push_bind(value.to_string())
                    .push(")");
            }
        }
        if let Some(year) = filters.graduation_year {
            builder.push(" AND b.graduation_year = ").push_bind(year);
        }

        builder.push(" ORDER BY b.last_name, b.first_name");

        let rows = builder
            .build_query_as::<BasicInformation>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
