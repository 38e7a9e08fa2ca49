use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::location::{GraduateLocation, Location, LocationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxLocationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn record(&self, location: &LocationInsert) -> Result<Location, AppError>;
    async fn latest_for_user(&self, user_id: &Uuid) -> Result<Option<Location>, AppError>;
    /// Latest location of every active graduate.
    async fn latest_per_graduate(&self) -> Result<Vec<GraduateLocation>, AppError>;
}

impl SqlxLocationRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxLocationRepo { pool }
    }
}

#[async_trait]
impl LocationRepository for SqlxLocationRepo {
    async fn record(&self, location: &LocationInsert) -> Result<Location, AppError> {
        let stored = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (user_id, latitude, longitude, address)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(location.user_id)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn latest_for_user(&self, user_id: &Uuid) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    async fn latest_per_graduate(&self) -> Result<Vec<GraduateLocation>, AppError> {
        let rows = sqlx::query_as::<_, GraduateLocation>(
            r#"
            SELECT DISTINCT ON (l.user_id)
                l.user_id,
                COALESCE(NULLIF(TRIM(CONCAT_WS(' ', b.first_name, b.last_name)), ''), u.name) AS name,
                b.career,
                b.institution,
                l.latitude,
                l.longitude,
                l.address,
                l.created_at AS recorded_at
            FROM locations l
            JOIN users u ON u.id = l.user_id
            LEFT JOIN basic_information b ON b.user_id = l.user_id
            WHERE u.deleted_at IS NULL AND u.role = 'graduate'
            ORDER BY l.user_id, l.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
