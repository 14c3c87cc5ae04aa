use std::sync::Arc;

use anyhow::Result;

use crate::applications::ApplicationLog;
use crate::catalog::ListingStore;
use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::profile::ProfileStore;
use crate::recommendation::service::RecommendationService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once per process; every store is behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<ListingStore>,
    pub profile: Arc<ProfileStore>,
    pub applications: Arc<ApplicationLog>,
    pub recommendations: RecommendationService,
}

impl AppState {
    /// Seeded catalogue, demo profile and an empty application log.
    pub fn new(config: Config, scorer: Arc<dyn MatchScorer>) -> Result<Self> {
        let catalog = Arc::new(ListingStore::seeded()?);
        let profile = Arc::new(ProfileStore::with_demo_profile());
        let recommendations =
            RecommendationService::new(Arc::clone(&catalog), Arc::clone(&profile), scorer);

        Ok(Self {
            config,
            catalog,
            profile,
            applications: Arc::new(ApplicationLog::new()),
            recommendations,
        })
    }
}
