mod domain;
mod infrastructure;
mod interfaces;
pub mod background_task;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, db, geocoding, telemetry, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use auth::jwt::JwtService;
use errors::GeocodingError;
use geocoding::nominatim::NominatimClient;
use repositories::sqlx_repo::{
    SqlxAcademicRepo, SqlxBasicInformationRepo, SqlxEmploymentRepo, SqlxLocationRepo, SqlxNewsRepo,
    SqlxReportRepo, SqlxStaffProfileRepo, SqlxUserRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    academic::AcademicHandler, auth::AuthHandler, basic_information::BasicInformationHandler,
    employment::EmploymentHandler, location::LocationHandler, news::NewsHandler, reports::ReportHandler,
    staff_profile::StaffProfileHandler, users::UserHandler,
};

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppLocationHandler = LocationHandler<SqlxLocationRepo, NominatimClient>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub user_handler: UserHandler<SqlxUserRepo>,
    pub basic_information_handler: BasicInformationHandler<SqlxBasicInformationRepo>,
    pub academic_handler: AcademicHandler<SqlxAcademicRepo>,
    pub employment_handler: EmploymentHandler<SqlxEmploymentRepo>,
    pub staff_profile_handler: StaffProfileHandler<SqlxStaffProfileRepo>,
    pub news_handler: NewsHandler<SqlxNewsRepo>,
    pub location_handler: AppLocationHandler,
    pub report_handler: ReportHandler<SqlxReportRepo>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Result<Self, GeocodingError> {
        let repos = SharedRepositories::new(pool);
        let geocoder = NominatimClient::new(config)?;

        Ok(AppState {
            auth_handler: AuthHandler::new(repos.user_repo.clone(), JwtService::new(config)),
            user_handler: UserHandler::new(repos.user_repo),
            basic_information_handler: BasicInformationHandler::new(repos.basic_information_repo),
            academic_handler: AcademicHandler::new(repos.academic_repo),
            employment_handler: EmploymentHandler::new(repos.employment_repo),
            staff_profile_handler: StaffProfileHandler::new(repos.staff_profile_repo),
            news_handler: NewsHandler::new(repos.news_repo),
            location_handler: LocationHandler::new(repos.location_repo, geocoder),
            report_handler: ReportHandler::new(repos.report_repo),
        })
    }
}
