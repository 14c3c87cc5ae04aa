use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::ListingStore;
use crate::matching::scorer::MatchScorer;
use crate::models::listing::Listing;
use crate::models::profile::Profile;
use crate::profile::ProfileStore;

/// A listing annotated with its match against the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: f64,
    pub match_reasons: Vec<String>,
}

#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<ListingStore>,
    profiles: Arc<ProfileStore>,
    scorer: Arc<dyn MatchScorer>,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<ListingStore>,
        profiles: Arc<ProfileStore>,
        scorer: Arc<dyn MatchScorer>,
    ) -> Self {
        Self {
            catalog,
            profiles,
            scorer,
        }
    }

    /// Top `count` listings for `profile`, or for the stored profile when
    /// `None`. Never returns more entries than the catalogue holds.
    pub async fn recommend(&self, profile: Option<Profile>, count: usize) -> Vec<Recommendation> {
        let profile = match profile {
            Some(profile) => profile,
            None => self.profiles.snapshot().await,
        };
        rank_listings(self.catalog.all(), self.scorer.as_ref(), &profile, count)
    }
}

/// Scores every listing, sorts descending by percentage and truncates.
/// The sort is stable: equal scores keep catalogue order.
pub fn rank_listings(
    listings: &[Listing],
    scorer: &dyn MatchScorer,
    profile: &Profile,
    count: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = listings
        .iter()
        .map(|listing| {
            let score = scorer.score(profile, listing);
            Recommendation {
                listing: listing.clone(),
                match_percentage: round_to_tenth(score.percentage),
                match_reasons: score.reasons,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    ranked.truncate(count);
    ranked
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
