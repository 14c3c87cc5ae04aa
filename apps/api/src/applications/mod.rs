//! Application Log: append-only record of "like" actions.

pub mod handlers;
pub mod statistics;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::applications::statistics::ApplicationCounts;
use crate::models::application::{Application, ApplicationStatus};

#[derive(Default)]
struct LogInner {
    entries: Vec<Application>,
    last_id: u64,
}

/// Entries and the id counter share one lock so ids stay unique and
/// sequential under concurrent appends.
#[derive(Default)]
pub struct ApplicationLog {
    inner: Mutex<LogInner>,
}

impl ApplicationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an `Applied` entry for `internship_id` and returns it.
    /// The id is never reused for the lifetime of the log.
    pub async fn record_like(&self, internship_id: i64) -> Application {
        let mut log = self.inner.lock().await;
        log.last_id += 1;

        let now = Utc::now();
        let application = Application {
            id: log.last_id,
            internship_id,
            status: ApplicationStatus::Applied,
            applied_date: now,
            timestamp: now,
        };
        log.entries.push(application.clone());
        application
    }

    pub async fn list(&self) -> Vec<Application> {
        self.inner.lock().await.entries.clone()
    }

    /// Total and per-status counts read under a single lock.
    pub async fn counts(&self) -> ApplicationCounts {
        let log = self.inner.lock().await;
        ApplicationCounts {
            applied: log.entries.len(),
            selected: count_status(&log.entries, ApplicationStatus::Selected),
            under_review: count_status(&log.entries, ApplicationStatus::UnderReview),
        }
    }
}

fn count_status(entries: &[Application], status: ApplicationStatus) -> usize {
    entries.iter().filter(|a| a.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_application_gets_id_one() {
        let log = ApplicationLog::new();
        let app = log.record_like(3).await;
        assert_eq!(app.id, 1);
        assert_eq!(app.internship_id, 3);
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.applied_date, app.timestamp);
    }

    #[tokio::test]
    async fn test_each_like_appends_exactly_one_with_next_id() {
        let log = ApplicationLog::new();
        log.record_like(1).await;
        let before = log.list().await.len();

        let app = log.record_like(2).await;

        assert_eq!(log.list().await.len(), before + 1);
        assert_eq!(app.id, 2);
        let ids: Vec<u64> = log.list().await.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_unknown_internship_id_is_accepted() {
        let log = ApplicationLog::new();
        let app = log.record_like(9999).await;
        assert_eq!(app.internship_id, 9999);
    }

    #[tokio::test]
    async fn test_concurrent_likes_never_share_an_id() {
        let log = Arc::new(ApplicationLog::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let log = Arc::clone(&log);
                tokio::spawn(async move { log.record_like(i).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_counts_only_see_applied() {
        let log = ApplicationLog::new();
        for id in 1..=3 {
            log.record_like(id).await;
        }
        let counts = log.counts().await;
        assert_eq!(counts.applied, 3);
        assert_eq!(counts.selected, 0);
        assert_eq!(counts.under_review, 0);
    }
}
