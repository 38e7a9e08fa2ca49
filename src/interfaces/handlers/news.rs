use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::news::{NewNewsRequest, UpdateNewsRequest},
    errors::AppError,
    use_cases::{
        extractors::{AuthClaims, StaffClaims},
        news::DEFAULT_PER_PAGE,
    },
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct NewsPageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[instrument(skip(_claims, state))]
pub async fn list_news(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    query: web::Query<NewsPageQuery>,
) -> Result<impl Responder, AppError> {
    let news = state
        .news_handler
        .list(query.page.unwrap_or(1), query.per_page.unwrap_or(DEFAULT_PER_PAGE))
        .await?;
    Ok(HttpResponse::Ok().json(news))
}

#[instrument(skip(claims, state, data))]
pub async fn create_news(
    claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewNewsRequest>,
) -> Result<impl Responder, AppError> {
    let author_id = claims.0.user_id()?;
    let news = state.news_handler.create(&author_id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(news))
}

#[instrument(skip(_claims, state))]
pub async fn get_news(
    _claims: AuthClaims,
    news_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let news_id = valid_uuid(&news_id)?;
    let news = state.news_handler.get(&news_id).await?;
    Ok(HttpResponse::Ok().json(news))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_news(
    _claims: StaffClaims,
    news_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateNewsRequest>,
) -> Result<impl Responder, AppError> {
    let news_id = valid_uuid(&news_id)?;
    let news = state.news_handler.update(&news_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(news))
}

#[instrument(skip(_claims, state))]
pub async fn delete_news(
    _claims: StaffClaims,
    news_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let news_id = valid_uuid(&news_id)?;
    state.news_handler.delete(&news_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
