use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::entities::token::AuthResponse;
use crate::entities::user::{LoginUser, NewUser, NewUserResponse, User};
use crate::errors::{AppError, AuthError};
use crate::repositories::token::TokenServiceRepository;
use crate::repositories::user::UserRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler { user_repo, token_service }
    }

    /// Public self-registration. The account is always a graduate.
    pub async fn register(&self, request: NewUser) -> Result<NewUserResponse, AppError> {
        request.validate()?;

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);
        let id = self.user_repo.create_user(&user_insert).await?;

        tracing::info!(user_id = %id, "Graduate registered");
        Ok(NewUserResponse {
            id,
            role: user_insert.role,
            message: "User created successfully".to_string(),
        })
    }

    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = self
            .user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| {
                tracing::error!("User lookup failed during login: {}", e);
                AuthError::WrongCredentials
            })?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let response = self.create_auth_response(&user)?;
        tracing::info!(user_id = %user.id, role = ?user.role, "User logged in");
        Ok(response)
    }

    pub fn create_auth_response(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(user).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        let refresh_token = self.token_service.create_refresh_jwt(&user.id).map_err(|e| {
            tracing::warn!("Failed to create refresh JWT: {}", e);
            AuthError::TokenCreation
        })?;

        Ok(AuthResponse::new(access_token, refresh_token))
    }

    /// Issues a fresh pair; the role is re-read so demotions take effect.
    pub async fn refresh_token(&self, token: &str) -> Result<AuthResponse, AuthError> {
        let decoded = self.token_service.decode_refresh_jwt(token)?;
        let user_id = uuid::Uuid::parse_str(&decoded.claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .user_repo
            .get_user_by_id(&user_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        self.create_auth_response(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::token::RefreshClaims;
    use crate::entities::user::Role;
    use crate::repositories::token::MockTokenServiceRepository;
    use crate::repositories::user::MockUserRepository;
    use chrono::Utc;
    use jsonwebtoken::{Header, TokenData};
    use uuid::Uuid;

    fn stored_user(password: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "María López".into(),
            email: "maria@example.com".into(),
            password_hash: hash_password(password).unwrap(),
            role: Role::Graduate,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn token_service() -> MockTokenServiceRepository {
        let mut tokens = MockTokenServiceRepository::new();
        tokens.expect_create_jwt().returning(|_| Ok("access".into()));
        tokens.expect_create_refresh_jwt().returning(|_| Ok("refresh".into()));
        tokens
    }

    #[tokio::test]
    async fn register_forces_graduate_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|insert| insert.role == Role::Graduate && insert.email == "nuevo@example.com")
            .returning(|_| Ok(Uuid::new_v4()));

        let handler = AuthHandler::new(repo, MockTokenServiceRepository::new());
        let response = handler
            .register(NewUser {
                name: "Nuevo Egresado".into(),
                email: "Nuevo@Example.com".into(),
                password: "Egresad0s!Portal#2024".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.role, Role::Graduate);
    }

    #[tokio::test]
    async fn register_surfaces_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .returning(|_| Err(AppError::Conflict("User with this email already exists".into())));

        let handler = AuthHandler::new(repo, MockTokenServiceRepository::new());
        let result = handler
            .register(NewUser {
                name: "Dup".into(),
                email: "dup@example.com".into(),
                password: "Egresad0s!Portal#2024".into(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn login_with_valid_password_issues_tokens() {
        let user = stored_user("Egresad0s!2024");
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email().returning(move |_| Ok(Some(user.clone())));

        let handler = AuthHandler::new(repo, token_service());
        let response = handler
            .login(LoginUser { email: "maria@example.com".into(), password: "Egresad0s!2024".into() })
            .await
            .unwrap();

        assert_eq!(response.access_token, "access");
        assert_eq!(response.token_type, "Bearer");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let user = stored_user("Egresad0s!2024");
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_email().returning(move |_| Ok(Some(user.clone())));

        let handler = AuthHandler::new(repo, token_service());
        let result = handler
            .login(LoginUser { email: "maria@example.com".into(), password: "Wrong!2024".into() })
            .await;

        assert!(matches!(result, Err(AuthError::WrongCredentials)));
    }

    #[tokio::test]
    async fn refresh_rejects_deleted_user() {
        let user_id = Uuid::new_v4();
        let mut tokens = MockTokenServiceRepository::new();
        tokens.expect_decode_refresh_jwt().returning(move |_| {
            Ok(TokenData {
                header: Header::default(),
                claims: RefreshClaims { sub: user_id.to_string(), iat: 0, exp: usize::MAX },
            })
        });

        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_id().returning(|_| Ok(None));

        let handler = AuthHandler::new(repo, tokens);
        assert!(matches!(handler.refresh_token("token").await, Err(AuthError::WrongCredentials)));
    }
}
