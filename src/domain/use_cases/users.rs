use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::password::hash_password,
    entities::user::{CreateUserRequest, NewUserResponse, PublicUser, Role, UpdateUserRequest, UserListResponse},
    errors::AppError,
    repositories::user::UserRepository,
};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

pub struct UserHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
}

impl<R> UserHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        UserHandler { user_repo }
    }

    pub async fn list_users(&self, role: Option<Role>, page: u32, per_page: u32) -> Result<UserListResponse, AppError> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let total = self.user_repo.count_users(role).await?;
        let users = self.user_repo.list_users(role, page, per_page).await?;

        Ok(UserListResponse {
            users: users.into_iter().map(PublicUser::from).collect(),
            total,
            page,
            per_page,
        })
    }

    /// Administrator-side creation with an explicit role.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<NewUserResponse, AppError> {
        request.validate()?;

        let hashed_password = hash_password(&request.user.password)?;
        let insert = request.user.prepare_with_role(hashed_password, request.role);
        let id = self.user_repo.create_user(&insert).await?;

        tracing::info!(user_id = %id, role = ?insert.role, "User created by administrator");
        Ok(NewUserResponse {
            id,
            role: insert.role,
            message: "User created successfully".to_string(),
        })
    }

    pub async fn get_user(&self, id: &Uuid) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_id(id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Administrators cannot change their own role.
    pub async fn update_user(
        &self,
        id: &Uuid,
        requested_by: &Uuid,
        request: UpdateUserRequest,
    ) -> Result<PublicUser, AppError> {
        request.validate()?;

        let current = self
            .user_repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let update = request.apply_to(&current);
        if id == requested_by && update.role != current.role {
            return Err(AppError::Conflict("You cannot change your own role".to_string()));
        }

        let updated = self.user_repo.update_user(id, &update).await?;
        Ok(PublicUser::from(updated))
    }

    /// Soft delete. Administrators cannot remove their own account.
    pub async fn delete_user(&self, id: &Uuid, requested_by: &Uuid) -> Result<(), AppError> {
        if id == requested_by {
            return Err(AppError::Conflict("You cannot delete your own account".to_string()));
        }

        self.user_repo.delete_user(id, requested_by).await?;
        tracing::info!(user_id = %id, deleted_by = %requested_by, "User soft-deleted");
        Ok(())
    }

    pub async fn me(&self, id: &Uuid) -> Result<PublicUser, AppError> {
        self.get_user(id).await
    }
}
