pub mod academic;
pub mod auth;
pub mod basic_information;
pub mod employment;
pub mod extractors;
pub mod location;
pub mod news;
pub mod reports;
pub mod staff_profile;
pub mod users;
