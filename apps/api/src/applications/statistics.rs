use rand::Rng;
use serde::Serialize;

/// Companies on the platform; the dashboard shows a fixed figure.
pub const TOTAL_COMPANIES: u32 = 156;

/// Dashboard counters. Field names are the wire names the frontend reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_companies: u32,
    pub applied_internships: usize,
    pub selected_internships: usize,
    pub pending_evaluations: usize,
    pub profile_views: u32,
    pub recommendations_today: u32,
}

/// Application counts as read from the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationCounts {
    pub applied: usize,
    pub selected: usize,
    pub under_review: usize,
}

/// Combines real counts with the two display-only random figures.
pub fn build_statistics<R: Rng + ?Sized>(counts: ApplicationCounts, rng: &mut R) -> Statistics {
    Statistics {
        total_companies: TOTAL_COMPANIES,
        applied_internships: counts.applied,
        selected_internships: counts.selected,
        pending_evaluations: counts.under_review,
        profile_views: rng.gen_range(20..=50),
        recommendations_today: rng.gen_range(10..=20),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_counts_pass_through() {
        let mut rng = StdRng::seed_from_u64(7);
        let stats = build_statistics(
            ApplicationCounts {
                applied: 4,
                selected: 1,
                under_review: 2,
            },
            &mut rng,
        );
        assert_eq!(stats.total_companies, 156);
        assert_eq!(stats.applied_internships, 4);
        assert_eq!(stats.selected_internships, 1);
        assert_eq!(stats.pending_evaluations, 2);
    }

    #[test]
    fn test_display_figures_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let stats = build_statistics(ApplicationCounts::default(), &mut rng);
            assert!((20..=50).contains(&stats.profile_views));
            assert!((10..=20).contains(&stats.recommendations_today));
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = serde_json::to_value(build_statistics(ApplicationCounts::default(), &mut rng))
            .unwrap();
        for key in [
            "totalCompanies",
            "appliedInternships",
            "selectedInternships",
            "pendingEvaluations",
            "profileViews",
            "recommendationsToday",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
