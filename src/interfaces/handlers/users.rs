use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::user::{CreateUserRequest, Role, UpdateUserRequest},
    errors::AppError,
    use_cases::{
        extractors::{AdminClaims, AuthClaims},
        users::DEFAULT_PER_PAGE,
    },
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<Role>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[instrument(skip(_claims, state))]
pub async fn list_users(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> Result<impl Responder, AppError> {
    let query = query.into_inner();
    let users = state
        .user_handler
        .list_users(query.role, query.page.unwrap_or(1), query.per_page.unwrap_or(DEFAULT_PER_PAGE))
        .await?;

    Ok(HttpResponse::Ok().json(users))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_user(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.user_handler.create_user(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(claims, state))]
pub async fn me(claims: AuthClaims, state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let user = state.user_handler.me(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip(_claims, state))]
pub async fn get_user(
    _claims: AdminClaims,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = valid_uuid(&user_id)?;
    let user = state.user_handler.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip(claims, state, data))]
pub async fn update_user(
    claims: AdminClaims,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = valid_uuid(&user_id)?;
    let admin_id = claims.0.user_id()?;
    let user = state.user_handler.update_user(&user_id, &admin_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip(claims, state))]
pub async fn delete_user(
    claims: AdminClaims,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = valid_uuid(&user_id)?;
    let admin_id = claims.0.user_id()?;

    state.user_handler.delete_user(&user_id, &admin_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
