use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{basic_information::BasicInformationRequest, report::ReportFilters},
    errors::AppError,
    use_cases::extractors::{GraduateClaims, StaffClaims},
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[instrument(skip(_claims, state))]
pub async fn list_basic_information(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    filters: web::Query<ReportFilters>,
) -> Result<impl Responder, AppError> {
    let rows = state.basic_information_handler.list(filters.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// `null` until the graduate saves the form once.
#[instrument(skip(claims, state))]
pub async fn get_own_basic_information(
    claims: GraduateClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let info = state.basic_information_handler.get_own(&user_id).await?;
    Ok(HttpResponse::Ok().json(info))
}

#[instrument(skip(claims, state, data))]
pub async fn upsert_own_basic_information(
    claims: GraduateClaims,
    state: web::Data<AppState>,
    data: web::Json<BasicInformationRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let info = state
        .basic_information_handler
        .upsert_own(&user_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(info))
}

#[instrument(skip(_claims, state))]
pub async fn get_basic_information_for_user(
    _claims: StaffClaims,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = valid_uuid(&user_id)?;
    let info = state.basic_information_handler.get_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(info))
}
