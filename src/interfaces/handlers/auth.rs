use actix_web::{post, web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::{
        token::RefreshTokenRequest,
        user::{LoginUser, NewUser},
    },
    errors::{AppError, AuthError},
    AppState,
};

#[post("/register")]
#[instrument(skip(state, user))]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_handler.register(user.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
#[instrument(skip(state, user))]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>,
) -> Result<HttpResponse, AuthError> {
    let response = state.auth_handler.login(user.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/refresh")]
#[instrument(skip(state, request))]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AuthError> {
    let response = state.auth_handler.refresh_token(&request.refresh_token).await?;
    Ok(HttpResponse::Ok().json(response))
}
