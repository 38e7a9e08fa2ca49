use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        basic_information::{BasicInformationRequest, BasicInformationResponse},
        report::ReportFilters,
    },
    errors::AppError,
    repositories::basic_information::BasicInformationRepository,
};

pub struct BasicInformationHandler<R>
where
    R: BasicInformationRepository,
{
    pub repo: R,
}

impl<R> BasicInformationHandler<R>
where
    R: BasicInformationRepository,
{
    pub fn new(repo: R) -> Self {
        BasicInformationHandler { repo }
    }

    /// `None` until the graduate fills the form for the first time.
    pub async fn get_own(&self, user_id: &Uuid) -> Result<Option<BasicInformationResponse>, AppError> {
        Ok(self.repo.get_by_user(user_id).await?.map(BasicInformationResponse::from))
    }

    pub async fn upsert_own(
        &self,
        user_id: &Uuid,
        request: BasicInformationRequest,
    ) -> Result<BasicInformationResponse, AppError> {
        request.validate()?;

        let stored = self.repo.upsert(&request.prepare_for_upsert(*user_id)).await?;
        tracing::info!(user_id = %user_id, completion = stored.completion(), "Basic information saved");
        Ok(BasicInformationResponse::from(stored))
    }

    pub async fn list(&self, filters: ReportFilters) -> Result<Vec<BasicInformationResponse>, AppError> {
        filters.validate()?;
        let rows = self.repo.list(&filters).await?;
        Ok(rows.into_iter().map(BasicInformationResponse::from).collect())
    }

    pub async fn get_for_user(&self, user_id: &Uuid) -> Result<BasicInformationResponse, AppError> {
        self.repo
            .get_by_user(user_id)
            .await?
            .map(BasicInformationResponse::from)
            .ok_or_else(|| AppError::NotFound("Basic information not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::basic_information::sample_basic_information;
    use crate::repositories::basic_information::MockBasicInformationRepository;

    #[tokio::test]
    async fn reads_carry_completion() {
        let user_id = Uuid::new_v4();
        let mut repo = MockBasicInformationRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(Some(sample_basic_information(user_id))));

        let handler = BasicInformationHandler::new(repo);
        let response = handler.get_for_user(&user_id).await.unwrap();
        assert_eq!(response.completion, 70);
    }

    #[tokio::test]
    async fn upsert_is_scoped_to_caller() {
        let user_id = Uuid::new_v4();
        let mut repo = MockBasicInformationRepository::new();
        repo.expect_upsert()
            .withf(move |upsert| upsert.user_id == user_id && upsert.first_name == "Laura")
            .returning(|upsert| Ok(sample_basic_information(upsert.user_id)));

        let handler = BasicInformationHandler::new(repo);
        let request: BasicInformationRequest = serde_json::from_value(serde_json::json!({
            "first_name": " Laura ",
            "last_name": "Gómez"
        }))
        .unwrap();

        let response = handler.upsert_own(&user_id, request).await.unwrap();
        assert_eq!(response.user_id, user_id);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_repository() {
        let repo = MockBasicInformationRepository::new();
        let handler = BasicInformationHandler::new(repo);
        let request: BasicInformationRequest = serde_json::from_value(serde_json::json!({
            "first_name": "",
            "last_name": "Gómez",
            "graduation_year": 1800
        }))
        .unwrap();

        assert!(matches!(
            handler.upsert_own(&Uuid::new_v4(), request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn missing_profile_for_staff_view_is_not_found() {
        let mut repo = MockBasicInformationRepository::new();
        repo.expect_get_by_user().returning(|_| Ok(None));

        let handler = BasicInformationHandler::new(repo);
        assert!(matches!(
            handler.get_for_user(&Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
