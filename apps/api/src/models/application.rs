use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    /// Counted by the dashboard statistics; nothing transitions into it yet.
    Selected,
    /// Counted by the dashboard statistics; nothing transitions into it yet.
    #[serde(rename = "Under Review")]
    UnderReview,
}

/// A recorded "like" against a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    /// Not checked against the listing store.
    pub internship_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}
