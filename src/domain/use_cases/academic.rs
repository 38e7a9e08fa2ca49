use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::academic_information::{AcademicInformation, AcademicInformationRequest},
    errors::AppError,
    repositories::academic_information::AcademicRepository,
};

pub struct AcademicHandler<R>
where
    R: AcademicRepository,
{
    pub repo: R,
}

impl<R> AcademicHandler<R>
where
    R: AcademicRepository,
{
    pub fn new(repo: R) -> Self {
        AcademicHandler { repo }
    }

    pub async fn create(&self, user_id: &Uuid, request: AcademicInformationRequest) -> Result<AcademicInformation, AppError> {
        request.validate()?;
        self.repo.create(&request.prepare_for_insert(*user_id)).await
    }

    pub async fn list_own(&self, user_id: &Uuid) -> Result<Vec<AcademicInformation>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn update(
        &self,
        user_id: &Uuid,
        record_id: &Uuid,
        request: AcademicInformationRequest,
    ) -> Result<AcademicInformation, AppError> {
        request.validate()?;
        self.repo.update(record_id, &request.prepare_for_insert(*user_id)).await
    }

    pub async fn delete(&self, user_id: &Uuid, record_id: &Uuid) -> Result<(), AppError> {
        self.repo.delete(record_id, user_id).await
    }

    pub async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<AcademicInformation>, AppError> {
        self.repo.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::academic_information::AcademicType;
    use crate::repositories::academic_information::MockAcademicRepository;
    use chrono::{NaiveDate, Utc};

    fn request() -> AcademicInformationRequest {
        AcademicInformationRequest {
            academic_type: AcademicType::Formal,
            level: Some("Maestría".into()),
            program: "Maestría en Ingeniería".into(),
            institution: "Universidad Nacional".into(),
            start_date: NaiveDate::from_ymd_opt(2021, 1, 15),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30),
            certificate: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_owner() {
        let user_id = Uuid::new_v4();
        let mut repo = MockAcademicRepository::new();
        repo.expect_create()
            .withf(move |insert| insert.user_id == user_id)
            .returning(|insert| {
                let now = Utc::now();
                Ok(AcademicInformation {
                    id: Uuid::new_v4(),
                    user_id: insert.user_id,
                    academic_type: insert.academic_type,
                    level: insert.level.clone(),
                    program: insert.program.clone(),
                    institution: insert.institution.clone(),
                    start_date: insert.start_date,
                    end_date: insert.end_date,
                    certificate: insert.certificate.clone(),
                    created_at: now,
                    updated_at: now,
                })
            });

        let handler = AcademicHandler::new(repo);
        let created = handler.create(&user_id, request()).await.unwrap();
        assert_eq!(created.user_id, user_id);
    }

    #[tokio::test]
    async fn inverted_dates_are_rejected_before_storage() {
        let handler = AcademicHandler::new(MockAcademicRepository::new());
        let mut r = request();
        r.end_date = NaiveDate::from_ymd_opt(2020, 1, 1);

        match handler.create(&Uuid::new_v4(), r).await {
            Err(AppError::ValidationError(fields)) => {
                assert!(fields.iter().any(|f| f.field == "end_date"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn updating_foreign_record_is_not_found() {
        let mut repo = MockAcademicRepository::new();
        repo.expect_update()
            .returning(|_, _| Err(AppError::NotFound("Academic record not found".into())));

        let handler = AcademicHandler::new(repo);
        let result = handler.update(&Uuid::new_v4(), &Uuid::new_v4(), request()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
