pub mod auth;
pub mod db;
pub mod geocoding;
pub mod telemetry;
pub mod utils;
