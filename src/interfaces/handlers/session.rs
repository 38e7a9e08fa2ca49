use actix_web::{get, HttpResponse};
use tracing::instrument;

use crate::{entities::session::SessionProps, errors::AuthError, use_cases::extractors::AuthClaims};

/// Current user and the navigation for their role.
#[get("/session")]
#[instrument(skip(claims), fields(user = %claims.0.sub))]
pub async fn get_session(claims: AuthClaims) -> Result<HttpResponse, AuthError> {
    let props = SessionProps::try_from(&claims.0)?;
    Ok(HttpResponse::Ok().json(props))
}
