use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::employment_information::{EmploymentInformationRequest, EmploymentInformationResponse},
    errors::AppError,
    repositories::employment_information::EmploymentRepository,
};

pub struct EmploymentHandler<R>
where
    R: EmploymentRepository,
{
    pub repo: R,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl<R> EmploymentHandler<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        EmploymentHandler { repo }
    }

    pub async fn create(
        &self,
        user_id: &Uuid,
        request: EmploymentInformationRequest,
    ) -> Result<EmploymentInformationResponse, AppError> {
        request.validate()?;
        let stored = self.repo.create(&request.prepare_for_insert(*user_id)).await?;
        Ok(stored.into_response(today()))
    }

    pub async fn list_own(&self, user_id: &Uuid) -> Result<Vec<EmploymentInformationResponse>, AppError> {
        self.list_at(user_id, today()).await
    }

    pub async fn update(
        &self,
        user_id: &Uuid,
        record_id: &Uuid,
        request: EmploymentInformationRequest,
    ) -> Result<EmploymentInformationResponse, AppError> {
        request.validate()?;
        let stored = self.repo.update(record_id, &request.prepare_for_insert(*user_id)).await?;
        Ok(stored.into_response(today()))
    }

    pub async fn delete(&self, user_id: &Uuid, record_id: &Uuid) -> Result<(), AppError> {
        self.repo.delete(record_id, user_id).await
    }

    pub async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<EmploymentInformationResponse>, AppError> {
        self.list_at(user_id, today()).await
    }

    async fn list_at(&self, user_id: &Uuid, today: NaiveDate) -> Result<Vec<EmploymentInformationResponse>, AppError> {
        let rows = self.repo.list_by_user(user_id).await?;
        Ok(rows.into_iter().map(|row| row.into_response(today)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::employment_information::EmploymentInformation;
    use crate::repositories::employment_information::MockEmploymentRepository;
    use crate::domain::duration::UNKNOWN_DURATION;

    fn stored(user_id: Uuid, start: Option<NaiveDate>, end: Option<NaiveDate>, is_current: bool) -> EmploymentInformation {
        let now = Utc::now();
        EmploymentInformation {
            id: Uuid::new_v4(),
            user_id,
            position: "Analista".into(),
            company: "EPM".into(),
            sector: Some("Energía".into()),
            start_date: start,
            end_date: end,
            is_current,
            hard_skills: vec!["Excel".into()],
            soft_skills: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn listing_computes_durations() {
        let user_id = Uuid::new_v4();
        let mut repo = MockEmploymentRepository::new();
        repo.expect_list_by_user().returning(move |_| {
            Ok(vec![
                stored(user_id, NaiveDate::from_ymd_opt(2023, 1, 1), None, true),
                stored(user_id, NaiveDate::from_ymd_opt(2020, 1, 1), NaiveDate::from_ymd_opt(2022, 3, 1), false),
                stored(user_id, None, None, false),
            ])
        });

        let handler = EmploymentHandler::new(repo);
        let today = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        let jobs = handler.list_at(&user_id, today).await.unwrap();

        assert_eq!(jobs[0].duration, "3 meses");
        assert_eq!(jobs[1].duration, "2 años y 2 meses");
        assert_eq!(jobs[2].duration, UNKNOWN_DURATION);
    }

    #[tokio::test]
    async fn current_job_with_end_date_is_invalid() {
        let handler = EmploymentHandler::new(MockEmploymentRepository::new());
        let request: EmploymentInformationRequest = serde_json::from_value(serde_json::json!({
            "position": "Docente",
            "company": "Colegio San José",
            "start_date": "2022-02-01",
            "end_date": "2023-02-01",
            "is_current": true
        }))
        .unwrap();

        assert!(matches!(
            handler.create(&Uuid::new_v4(), request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let owner = Uuid::new_v4();
        let record = Uuid::new_v4();
        let mut repo = MockEmploymentRepository::new();
        repo.expect_delete()
            .withf(move |id, user| *id == record && *user == owner)
            .times(1)
            .returning(|_, _| Ok(()));

        let handler = EmploymentHandler::new(repo);
        assert!(handler.delete(&owner, &record).await.is_ok());
    }
}
