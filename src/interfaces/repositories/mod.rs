pub mod academic_information;
pub mod basic_information;
pub mod employment_information;
pub mod geocoder;
pub mod location;
pub mod news;
pub mod report;
pub mod sqlx_repo;
pub mod staff_profile;
pub mod token;
pub mod user;
