use sqlx::PgPool;

use crate::repositories::sqlx_repo::{
    SqlxAcademicRepo, SqlxBasicInformationRepo, SqlxEmploymentRepo, SqlxLocationRepo, SqlxNewsRepo,
    SqlxReportRepo, SqlxStaffProfileRepo, SqlxUserRepo,
};

/// One repository per aggregate, all sharing the same pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: SqlxUserRepo,
    pub basic_information_repo: SqlxBasicInformationRepo,
    pub academic_repo: SqlxAcademicRepo,
    pub employment_repo: SqlxEmploymentRepo,
    pub staff_profile_repo: SqlxStaffProfileRepo,
    pub news_repo: SqlxNewsRepo,
    pub location_repo: SqlxLocationRepo,
    pub report_repo: SqlxReportRepo,
}

impl SharedRepositories {
    pub fn new(pool: PgPool) -> Self {
        SharedRepositories {
            user_repo: SqlxUserRepo::new(pool.clone()),
            basic_information_repo: SqlxBasicInformationRepo::new(pool.clone()),
            academic_repo: SqlxAcademicRepo::new(pool.clone()),
            employment_repo: SqlxEmploymentRepo::new(pool.clone()),
            staff_profile_repo: SqlxStaffProfileRepo::new(pool.clone()),
            news_repo: SqlxNewsRepo::new(pool.clone()),
            location_repo: SqlxLocationRepo::new(pool.clone()),
            report_repo: SqlxReportRepo::new(pool),
        }
    }
}
