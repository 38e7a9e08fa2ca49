use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::staff_profile::{StaffProfile, StaffProfileRequest},
    errors::AppError,
    repositories::staff_profile::StaffProfileRepository,
};

pub struct StaffProfileHandler<R>
where
    R: StaffProfileRepository,
{
    pub repo: R,
}

impl<R> StaffProfileHandler<R>
where
    R: StaffProfileRepository,
{
    pub fn new(repo: R) -> Self {
        StaffProfileHandler { repo }
    }

    pub async fn get_own(&self, user_id: &Uuid) -> Result<Option<StaffProfile>, AppError> {
        self.repo.get_by_user(user_id).await
    }

    pub async fn upsert_own(&self, user_id: &Uuid, request: StaffProfileRequest) -> Result<StaffProfile, AppError> {
        request.validate()?;
        self.repo.upsert(&request.prepare_for_upsert(*user_id)).await
    }
}
