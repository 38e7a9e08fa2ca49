use tokio::time::{interval, Duration};

use crate::repositories::{sqlx_repo::SqlxUserRepo, user::UserRepository};

const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

/// Hard-deletes accounts that were soft-deleted more than `retention_days`
/// ago. Runs once at start-up and then daily.
pub async fn start_purge_task(repo: SqlxUserRepo, retention_days: i64) {
    let mut interval = interval(PURGE_INTERVAL);

    loop {
        interval.tick().await;

        match repo.purge_soft_deleted_users(retention_days).await {
            Ok(0) => tracing::debug!("No soft-deleted users to purge"),
            Ok(count) => tracing::info!(count, retention_days, "Purged soft-deleted users"),
            Err(e) => tracing::error!("Purge failed: {}", e),
        }
    }
}
