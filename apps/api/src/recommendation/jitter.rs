//! Display-only perturbation of match percentages.
//!
//! Runs after ranking and mutates values in place, so the order handed to the
//! caller is the order the scorer decided.

use rand::Rng;

use crate::recommendation::service::Recommendation;

/// Largest absolute offset added to a percentage.
pub const JITTER_SPREAD: i32 = 5;
/// Jittered percentages never drop below this.
pub const JITTER_FLOOR: f64 = 60.0;

pub fn apply_jitter<R: Rng + ?Sized>(recommendations: &mut [Recommendation], rng: &mut R) {
    for rec in recommendations.iter_mut() {
        let offset = rng.gen_range(-JITTER_SPREAD..=JITTER_SPREAD);
        rec.match_percentage = (rec.match_percentage + f64::from(offset)).max(JITTER_FLOOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingStore;
    use crate::matching::scorer::WeightedMatchScorer;
    use crate::profile::demo_profile;
    use crate::recommendation::service::rank_listings;
    use rand::{rngs::StdRng, SeedableRng};

    fn ranked() -> Vec<Recommendation> {
        let store = ListingStore::seeded().unwrap();
        rank_listings(store.all(), &WeightedMatchScorer::default(), &demo_profile(), 5)
    }

    #[test]
    fn test_order_is_preserved() {
        let before: Vec<u32> = ranked().iter().map(|r| r.listing.id).collect();
        for seed in 0..50 {
            let mut recs = ranked();
            apply_jitter(&mut recs, &mut StdRng::seed_from_u64(seed));
            let after: Vec<u32> = recs.iter().map(|r| r.listing.id).collect();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_floor_and_spread() {
        let original = ranked();
        for seed in 0..50 {
            let mut recs = original.clone();
            apply_jitter(&mut recs, &mut StdRng::seed_from_u64(seed));
            for (jittered, base) in recs.iter().zip(&original) {
                assert!(jittered.match_percentage >= JITTER_FLOOR);
                let upper = base.match_percentage + f64::from(JITTER_SPREAD);
                assert!(jittered.match_percentage <= upper.max(JITTER_FLOOR));
            }
        }
    }

    #[test]
    fn test_high_scores_move_by_at_most_five() {
        let mut recs = ranked();
        for rec in recs.iter_mut() {
            rec.match_percentage = 90.0;
        }
        apply_jitter(&mut recs, &mut StdRng::seed_from_u64(9));
        for rec in &recs {
            assert!((85.0..=95.0).contains(&rec.match_percentage));
            assert_eq!(rec.match_percentage.fract(), 0.0);
        }
    }
}
