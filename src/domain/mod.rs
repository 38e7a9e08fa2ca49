pub mod completion;
pub mod duration;
pub mod entities;
pub mod geocoding;
pub mod navigation;
pub mod password;
pub mod reports;
pub mod use_cases;
