pub mod academic;
pub mod auth;
pub mod basic_information;
pub mod employment;
pub mod home;
pub mod location;
pub mod news;
pub mod reports;
pub mod session;
pub mod staff_profile;
pub mod system;
pub mod users;
