pub mod academic_information;
pub mod basic_information;
pub mod employment_information;
pub mod location;
pub mod news;
pub mod option_fields;
pub mod report;
pub mod session;
pub mod staff_profile;
pub mod token;
pub mod user;
pub mod validation;
