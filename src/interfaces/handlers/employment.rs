use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::employment_information::EmploymentInformationRequest,
    errors::AppError,
    use_cases::extractors::{GraduateClaims, StaffClaims},
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[instrument(skip(claims, state))]
pub async fn list_own_employment(claims: GraduateClaims, state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let records = state.employment_handler.list_own(&user_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(claims, state, data))]
pub async fn create_employment(
    claims: GraduateClaims,
    state: web::Data<AppState>,
    data: web::Json<EmploymentInformationRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let record = state.employment_handler.create(&user_id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

#[instrument(skip(claims, state, data))]
pub async fn update_employment(
    claims: GraduateClaims,
    record_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<EmploymentInformationRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let record_id = valid_uuid(&record_id)?;
    let record = state
        .employment_handler
        .update(&user_id, &record_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[instrument(skip(claims, state))]
pub async fn delete_employment(
    claims: GraduateClaims,
    record_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let record_id = valid_uuid(&record_id)?;
    state.employment_handler.delete(&user_id, &record_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state))]
pub async fn list_employment_for_user(
    _claims: StaffClaims,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user_id = valid_uuid(&user_id)?;
    let records = state.employment_handler.list_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(records))
}
