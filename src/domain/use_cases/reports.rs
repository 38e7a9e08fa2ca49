use validator::Validate;

use crate::{
    domain::reports::build_report,
    entities::report::{GraduateReport, ReportFilters},
    errors::AppError,
    repositories::report::ReportRepository,
};

pub struct ReportHandler<R>
where
    R: ReportRepository,
{
    pub repo: R,
}

impl<R> ReportHandler<R>
where
    R: ReportRepository,
{
    pub fn new(repo: R) -> Self {
        ReportHandler { repo }
    }

    /// Recomputed on every call from the current graduate records.
    pub async fn graduate_report(&self, filters: ReportFilters) -> Result<GraduateReport, AppError> {
        filters.validate()?;

        let records = self.repo.graduate_records().await?;
        let report = build_report(&records, &filters);
        tracing::debug!(
            total = records.len(),
            filtered = report.summary.total_graduates,
            "Graduate report built"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::report::GraduateRecord;
    use crate::repositories::report::MockReportRepository;
    use uuid::Uuid;

    fn record(city: Option<&str>, year: i32) -> GraduateRecord {
        GraduateRecord {
            user_id: Uuid::new_v4(),
            city: city.map(str::to_string),
            graduation_year: Some(year),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filters_apply_but_options_cover_everyone() {
        let mut repo = MockReportRepository::new();
        repo.expect_graduate_records()
            .returning(|| Ok(vec![record(Some("Medellín"), 2020), record(None, 2021), record(Some("Cali"), 2020)]));

        let handler = ReportHandler::new(repo);
        let report = handler
            .graduate_report(ReportFilters { graduation_year: Some(2020), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(report.summary.total_graduates, 2);
        assert_eq!(report.filter_options.graduation_years.len(), 2);
        let city_total: u64 = report.distributions.city.iter().map(|b| b.count).sum();
        assert_eq!(city_total, 2);
    }

    #[tokio::test]
    async fn invalid_filters_are_rejected() {
        let handler = ReportHandler::new(MockReportRepository::new());
        let result = handler
            .graduate_report(ReportFilters { graduation_year: Some(1200), ..Default::default() })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
