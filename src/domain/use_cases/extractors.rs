use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{
    entities::{token::Claims, user::Role},
    errors::AuthError,
};

fn claims_with(req: &HttpRequest, allowed: fn(Role) -> bool, denied: &str) -> Result<Claims, AuthError> {
    match req.extensions().get::<Claims>() {
        Some(claims) if allowed(claims.role) => Ok(claims.clone()),
        Some(claims) => {
            tracing::warn!(user = %claims.sub, role = ?claims.role, path = req.path(), "Role not allowed");
            Err(AuthError::Forbidden(denied.to_string()))
        }
        None => Err(AuthError::MissingCredentials),
    }
}

/// Any authenticated user. Returns 401 when the middleware attached no claims.
#[derive(Debug)]
pub struct AuthClaims(pub Claims);

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(claims_with(req, |_| true, "").map(AuthClaims).map_err(Into::into))
    }
}

/// Administrators only; 403 for other roles.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            claims_with(req, |role| role == Role::Administrator, "Administrator access required")
                .map(AdminClaims)
                .map_err(Into::into),
        )
    }
}

/// Administrators and coordinators.
#[derive(Debug)]
pub struct StaffClaims(pub Claims);

impl FromRequest for StaffClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            claims_with(req, |role| role.is_staff(), "Coordinator or administrator access required")
                .map(StaffClaims)
                .map_err(Into::into),
        )
    }
}

#[derive(Debug)]
pub struct GraduateClaims(pub Claims);

impl FromRequest for GraduateClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            claims_with(req, |role| role == Role::Graduate, "Graduate access required")
                .map(GraduateClaims)
                .map_err(Into::into),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test::TestRequest};

    fn claims(role: Role) -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "user@example.com".into(),
            name: "User".into(),
            role,
            exp: usize::MAX,
            iat: 0,
        }
    }

    fn status_of(err: actix_web::Error) -> StatusCode {
        err.as_response_error().status_code()
    }

    #[actix_web::test]
    async fn missing_claims_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = AuthClaims::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn coordinator_is_staff_but_not_admin() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims(Role::Coordinator));

        assert!(StaffClaims::extract(&req).await.is_ok());
        let err = AdminClaims::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
        assert!(GraduateClaims::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn graduate_is_not_staff() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims(Role::Graduate));

        assert!(GraduateClaims::extract(&req).await.is_ok());
        let err = StaffClaims::extract(&req).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
    }
}
