use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::staff_profile::StaffProfileRequest,
    errors::AppError,
    use_cases::extractors::StaffClaims,
    AppState,
};

#[instrument(skip(claims, state))]
pub async fn get_own_staff_profile(claims: StaffClaims, state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let profile = state.staff_profile_handler.get_own(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn upsert_own_staff_profile(
    claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<StaffProfileRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let profile = state.staff_profile_handler.upsert_own(&user_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}
