//! Match scoring — pluggable, trait-based scorer that measures a student
//! profile against a single listing.
//!
//! Default: `WeightedMatchScorer`, a fixed weighted sum over four components:
//! skills coverage, location, sector interest and education tier.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::matching::reasons::match_reasons;
use crate::models::listing::Listing;
use crate::models::profile::Profile;

/// Profile locations that earn the flexible-location credit.
const FLEXIBLE_LOCATIONS: [&str; 3] = ["", "any", "remote"];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub percentage: f64, // 0 – 100
    pub reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the
/// recommendation service or the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &Profile, listing: &Listing) -> MatchScore;
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub location_exact: f64,
    pub location_flexible: f64,
    pub sector: f64,
    pub education_engineering: f64,
    pub education_masters: f64,
    pub education_default: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 50.0,
            location_exact: 15.0,
            location_flexible: 10.0,
            sector: 25.0,
            education_engineering: 10.0,
            education_masters: 8.0,
            education_default: 5.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. skills    = w.skills × |profile ∩ listing| / |listing|   (0 if listing has no skills)
/// 2. location  = exact match → w.location_exact; "", "any", "remote" → w.location_flexible
/// 3. sector    = w.sector if any interest overlaps the sector, else 0
/// 4. education = first matching tier of engineering / masters / default
/// 5. total     = min(sum, 100)
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, profile: &Profile, listing: &Listing) -> MatchScore {
        MatchScore {
            percentage: compute_match_percentage(profile, listing, &self.weights),
            reasons: match_reasons(profile, listing),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Components
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_match_percentage(profile: &Profile, listing: &Listing, w: &MatchWeights) -> f64 {
    let total = skills_component(profile, listing, w)
        + location_component(profile, listing, w)
        + sector_component(profile, listing, w)
        + education_component(profile, w);
    total.min(100.0)
}

pub(crate) fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

/// Fraction of the listing's skills the profile covers. Not symmetric.
fn skills_component(profile: &Profile, listing: &Listing, w: &MatchWeights) -> f64 {
    let wanted = lowercase_set(&listing.skills);
    if wanted.is_empty() {
        return 0.0;
    }
    let have = lowercase_set(&profile.skills);
    let overlap = wanted.intersection(&have).count();
    w.skills * overlap as f64 / wanted.len() as f64
}

pub(crate) fn location_matches(profile: &Profile, listing: &Listing) -> bool {
    profile.location.to_lowercase() == listing.location.to_lowercase()
}

fn location_component(profile: &Profile, listing: &Listing, w: &MatchWeights) -> f64 {
    if location_matches(profile, listing) {
        w.location_exact
    } else if FLEXIBLE_LOCATIONS.contains(&profile.location.to_lowercase().as_str()) {
        w.location_flexible
    } else {
        0.0
    }
}

/// True when any interest is contained in the sector or vice versa.
pub(crate) fn sector_matches(profile: &Profile, listing: &Listing) -> bool {
    let sector = listing.sector.to_lowercase();
    profile.interests.iter().any(|interest| {
        let interest = interest.to_lowercase();
        sector.contains(&interest) || interest.contains(&sector)
    })
}

fn sector_component(profile: &Profile, listing: &Listing, w: &MatchWeights) -> f64 {
    if sector_matches(profile, listing) {
        w.sector
    } else {
        0.0
    }
}

fn education_component(profile: &Profile, w: &MatchWeights) -> f64 {
    let education = profile.education.to_lowercase();
    if education.contains("b.tech") || education.contains("engineering") {
        w.education_engineering
    } else if education.contains("master") || education.contains("m.tech") {
        w.education_masters
    } else {
        w.education_default
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
