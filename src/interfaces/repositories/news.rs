use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::news::{News, NewsInsert, NewsUpdate},
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxNewsRepo},
};

const NEWS_SELECT: &str = r#"
    SELECT n.id, n.title, n.content_markdown, n.image_url, n.author_id,
           COALESCE(u.name, 'Equipo de egresados') AS author_name,
           n.created_at, n.updated_at
    FROM news n
    LEFT JOIN users u ON u.id = n.author_id
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create(&self, news: &NewsInsert) -> Result<News, AppError>;
    async fn get(&self, id: &Uuid) -> Result<News, AppError>;
    async fn list(&self, page: u32, per_page: u32) -> Result<Vec<News>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn update(&self, id: &Uuid, news: &NewsUpdate) -> Result<News, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxNewsRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxNewsRepo { pool }
    }
}

#[async_trait]
impl NewsRepository for SqlxNewsRepo {
    async fn create(&self, news: &NewsInsert) -> Result<News, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO news (title, content_markdown, image_url, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&news.title)
        .bind(&news.content_markdown)
        .bind(&news.image_url)
        .bind(news.author_id)
        .fetch_one(&self.pool)
        .await?;

        self.get(&id).await
    }

    async fn get(&self, id: &Uuid) -> Result<News, AppError> {
        sqlx::query_as::<_, News>(&format!("{NEWS_SELECT} WHERE n.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    async fn list(&self, page: u32, per_page: u32) -> Result<Vec<News>, AppError> {
        let rows = sqlx::query_as::<_, News>(&format!(
            "{NEWS_SELECT} ORDER BY n.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn update(&self, id: &Uuid, news: &NewsUpdate) -> Result<News, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE news SET
                title = $1,
                content_markdown = $2,
                image_url = $3,
                updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(&news.title)
        .bind(&news.content_markdown)
        .bind(&news.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("News not found".to_string()));
        }

        self.get(id).await
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("News not found".to_string()));
        }

        Ok(())
    }
}
