use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::news::{NewNewsRequest, NewsDetailResponse, NewsListResponse, UpdateNewsRequest},
    errors::AppError,
    repositories::news::NewsRepository,
};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 50;

pub struct NewsHandler<R>
where
    R: NewsRepository,
{
    pub repo: R,
}

impl<R> NewsHandler<R>
where
    R: NewsRepository,
{
    pub fn new(repo: R) -> Self {
        NewsHandler { repo }
    }

    pub async fn create(&self, author_id: &Uuid, request: NewNewsRequest) -> Result<NewsDetailResponse, AppError> {
        request.validate()?;

        let news = self.repo.create(&request.prepare_for_insert(*author_id)).await?;
        tracing::info!(news_id = %news.id, author_id = %author_id, "News published");
        Ok(news.to_detail_response())
    }

    /// Newest first.
    pub async fn list(&self, page: u32, per_page: u32) -> Result<NewsListResponse, AppError> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let total = self.repo.count().await?;
        let items = self.repo.list(page, per_page).await?;

        Ok(NewsListResponse {
            items: items.iter().map(|n| n.to_list_item()).collect(),
            total,
            page,
            per_page,
        })
    }

    pub async fn get(&self, id: &Uuid) -> Result<NewsDetailResponse, AppError> {
        Ok(self.repo.get(id).await?.to_detail_response())
    }

    pub async fn update(&self, id: &Uuid, request: UpdateNewsRequest) -> Result<NewsDetailResponse, AppError> {
        request.validate()?;

        let current = self.repo.get(id).await?;
        let updated = self.repo.update(id, &request.apply_to(&current)).await?;
        Ok(updated.to_detail_response())
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!(news_id = %id, "News deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::news::News;
    use crate::repositories::news::MockNewsRepository;
    use chrono::Utc;

    fn stored(id: Uuid, title: &str, body: &str) -> News {
        let now = Utc::now();
        News {
            id,
            title: title.into(),
            content_markdown: body.into(),
            image_url: None,
            author_id: Some(Uuid::new_v4()),
            author_name: "Coordinación".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_sanitizes_and_renders() {
        let author = Uuid::new_v4();
        let mut repo = MockNewsRepository::new();
        repo.expect_create()
            .withf(move |insert| insert.author_id == author && !insert.content_markdown.contains("<script>"))
            .returning(|insert| Ok(stored(Uuid::new_v4(), &insert.title, &insert.content_markdown)));

        let handler = NewsHandler::new(repo);
        let detail = handler
            .create(
                &author,
                NewNewsRequest {
                    title: "Feria laboral 2024".into(),
                    content_markdown: "**Inscríbete**<script>alert(1)</script>".into(),
                    image_url: None,
                },
            )
            .await
            .unwrap();

        assert!(detail.content_html.contains("<strong>Inscríbete</strong>"));
        assert!(!detail.content_html.contains("<script>"));
    }

    #[tokio::test]
    async fn list_clamps_paging_and_reports_total() {
        let mut repo = MockNewsRepository::new();
        repo.expect_count().returning(|| Ok(2));
        repo.expect_list()
            .withf(|page, per_page| *page == 1 && *per_page == MAX_PER_PAGE)
            .returning(|_, _| {
                Ok(vec![
                    stored(Uuid::new_v4(), "Segunda", "b"),
                    stored(Uuid::new_v4(), "Primera", "a"),
                ])
            });

        let handler = NewsHandler::new(repo);
        let response = handler.list(0, 500).await.unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.items[0].title, "Segunda");
    }

    #[tokio::test]
    async fn patch_keeps_untouched_fields() {
        let id = Uuid::new_v4();
        let mut repo = MockNewsRepository::new();
        repo.expect_get().returning(move |_| Ok(stored(id, "Título original", "Cuerpo")));
        repo.expect_update()
            .withf(|_, update| update.title == "Nuevo título" && update.content_markdown == "Cuerpo")
            .returning(move |_, update| Ok(stored(id, &update.title, &update.content_markdown)));

        let handler = NewsHandler::new(repo);
        let patch: UpdateNewsRequest = serde_json::from_str(r#"{"title": "Nuevo título"}"#).unwrap();
        let detail = handler.update(&id, patch).await.unwrap();

        assert_eq!(detail.title, "Nuevo título");
    }

    #[tokio::test]
    async fn missing_news_is_not_found() {
        let mut repo = MockNewsRepository::new();
        repo.expect_get().returning(|_| Err(AppError::NotFound("News not found".into())));

        let handler = NewsHandler::new(repo);
        assert!(matches!(handler.get(&Uuid::new_v4()).await, Err(AppError::NotFound(_))));
    }
}
