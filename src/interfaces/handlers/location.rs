use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::location::NewLocationRequest,
    errors::AppError,
    use_cases::extractors::{GraduateClaims, StaffClaims},
    AppState,
};

#[instrument(skip(claims, state, data))]
pub async fn record_location(
    claims: GraduateClaims,
    state: web::Data<AppState>,
    data: web::Json<NewLocationRequest>,
) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let location = state.location_handler.record(&user_id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(location))
}

#[instrument(skip(claims, state))]
pub async fn latest_own_location(claims: GraduateClaims, state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let user_id = claims.0.user_id()?;
    let location = state.location_handler.latest_own(&user_id).await?;
    Ok(HttpResponse::Ok().json(location))
}

/// Markers for the staff map. Each marker waits for one paced geocoder lookup.
#[instrument(skip(_claims, state))]
pub async fn graduate_map(_claims: StaffClaims, state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let markers = state.location_handler.map().await?;
    Ok(HttpResponse::Ok().json(markers))
}
