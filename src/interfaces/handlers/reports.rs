use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::report::ReportFilters,
    errors::AppError,
    use_cases::extractors::StaffClaims,
    AppState,
};

#[instrument(skip(_claims, state))]
pub async fn graduate_report(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    filters: web::Query<ReportFilters>,
) -> Result<impl Responder, AppError> {
    let report = state.report_handler.graduate_report(filters.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}
