use std::collections::HashSet;

use crate::matching::scorer::{location_matches, lowercase_set, sector_matches};
use crate::models::listing::Listing;
use crate::models::profile::Profile;

/// Maximum number of skill names quoted in the skills reason.
const MAX_QUOTED_SKILLS: usize = 3;

/// Human-readable reasons for a match, built from the same tests the scorer
/// uses. An empty list is a valid result.
pub fn match_reasons(profile: &Profile, listing: &Listing) -> Vec<String> {
    let mut reasons = Vec::new();

    let matching = matching_skills(profile, listing);
    if !matching.is_empty() {
        let quoted: Vec<&str> = matching
            .iter()
            .take(MAX_QUOTED_SKILLS)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Skills match: {}", quoted.join(", ")));
    }

    if sector_matches(profile, listing) {
        reasons.push(format!("Aligns with {} interest", listing.sector));
    }

    if location_matches(profile, listing) {
        reasons.push(format!("Located in {}", listing.location));
    }

    reasons
}

/// Listing skills the profile also lists, in listing order, spelled as the
/// listing spells them.
fn matching_skills(profile: &Profile, listing: &Listing) -> Vec<String> {
    let have = lowercase_set(&profile.skills);
    let mut seen = HashSet::new();
    listing
        .skills
        .iter()
        .filter(|skill| {
            let key = skill.to_lowercase();
            have.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            id: 2,
            company: "WebDev Studios".to_string(),
            role: "Frontend Developer Intern".to_string(),
            location: "Mumbai".to_string(),
            stipend: "₹20,000/month".to_string(),
            duration: "4 months".to_string(),
            skills: ["React.js", "JavaScript", "HTML", "CSS", "Node.js"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sector: "Technology".to_string(),
            description: String::new(),
            requirements: String::new(),
            logo: String::new(),
        }
    }

    fn profile(skills: &[&str], interests: &[&str], location: &str) -> Profile {
        Profile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_all_three_reasons_in_order() {
        let reasons = match_reasons(&profile(&["react.js"], &["tech"], "MUMBAI"), &listing());
        assert_eq!(
            reasons,
            vec![
                "Skills match: React.js".to_string(),
                "Aligns with Technology interest".to_string(),
                "Located in Mumbai".to_string(),
            ]
        );
    }

    #[test]
    fn test_skills_reason_quotes_at_most_three() {
        let p = profile(&["html", "css", "node.js", "javascript", "react.js"], &[], "Delhi");
        let reasons = match_reasons(&p, &listing());
        assert_eq!(reasons, vec!["Skills match: React.js, JavaScript, HTML".to_string()]);
    }

    #[test]
    fn test_no_overlap_yields_empty_reasons() {
        let reasons = match_reasons(&profile(&["Rust"], &["Finance"], "Delhi"), &listing());
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_flexible_location_is_not_a_location_reason() {
        let reasons = match_reasons(&profile(&[], &[], "remote"), &listing());
        assert!(reasons.is_empty());
    }
}
