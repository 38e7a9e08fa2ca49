use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Forced in `main` so the health check reports process uptime.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const API_PREFIX: &str = "/api/v1";
pub const ADMIN_PREFIX: &str = "/api/v1/admin";
