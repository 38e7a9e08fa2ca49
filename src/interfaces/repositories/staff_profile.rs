use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::staff_profile::{StaffProfile, StaffProfileUpsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxStaffProfileRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaffProfileRepository: Send + Sync {
    async fn get_by_user(&self, user_id: &Uuid) -> Result<Option<StaffProfile>, AppError>;
    async fn upsert(&self, profile: &StaffProfileUpsert) -> Result<StaffProfile, AppError>;
}

impl SqlxStaffProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxStaffProfileRepo { pool }
    }
}

#[async_trait]
impl StaffProfileRepository for SqlxStaffProfileRepo {
    async fn get_by_user(&self, user_id: &Uuid) -> Result<Option<StaffProfile>, AppError> {
        let profile = sqlx::query_as::<_, StaffProfile>("SELECT * FROM staff_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn upsert(&self, profile: &StaffProfileUpsert) -> Result<StaffProfile, AppError> {
        let stored = sqlx::query_as::<_, StaffProfile>(
            r#"
            INSERT INTO staff_profiles (user_id, position, phone, office, department)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                position = EXCLUDED.position,
                phone = EXCLUDED.phone,
                office = EXCLUDED.office,
                department = EXCLUDED.department,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.position)
        .bind(&profile.phone)
        .bind(&profile.office)
        .bind(&profile.department)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
