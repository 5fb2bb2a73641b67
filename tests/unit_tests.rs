// Unit tests for the public scoring helpers

use internship_match::core::{
    affinity::CATEGORY_AFFINITY,
    calculate_match_score, education_match, interest_match, location_match, skill_match,
};
use internship_match::models::{
    Difficulty, InternshipType, LocationPreference, ScoringWeights, UserProfile,
};
use internship_match::Catalog;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_skill_match_is_case_insensitive() {
    let required = strings(&["Python", "SQL"]);
    assert_eq!(skill_match(&strings(&["python"]), &required), 50.0);
    assert_eq!(skill_match(&strings(&["PYTHON", "sql"]), &required), 100.0);
}

#[test]
fn test_short_tokens_overlap_generously() {
    // Known heuristic limitation: "AI" is a substring of "Email Marketing"
    let required = strings(&["Email Marketing"]);
    assert_eq!(skill_match(&strings(&["AI"]), &required), 100.0);
}

#[test]
fn test_empty_skill_requirements_never_score() {
    for user in [vec![], strings(&["Python"]), strings(&["a", "b", "c"])] {
        assert_eq!(skill_match(&user, &[]), 0.0);
    }
}

#[test]
fn test_education_substring_either_direction() {
    assert_eq!(education_match("MBA", &strings(&["MBA - Marketing"])), 100.0);
    assert_eq!(education_match("MBA - Marketing (2nd year)", &strings(&["MBA - Marketing"])), 100.0);
    assert_eq!(education_match("B.Tech - Electronics", &strings(&["B.Tech - Mechanical"])), 0.0);
    assert_eq!(education_match("BCA", &[]), 0.0);
}

#[test]
fn test_every_affinity_entry_scores_interest() {
    for (category, related) in CATEGORY_AFFINITY {
        for interest in *related {
            assert_eq!(interest_match(&strings(&[*interest]), category), 100.0);
        }
        assert_eq!(interest_match(&strings(&["not-a-category"]), category), 0.0);
    }
}

#[test]
fn test_location_range() {
    let preferences = [
        LocationPreference::online(),
        LocationPreference::offline(["Bengaluru"]),
        LocationPreference::offline(["Jaipur", "Indore"]),
    ];
    let types = [InternshipType::Remote, InternshipType::OnSite, InternshipType::Hybrid];

    for preference in &preferences {
        for work_type in types {
            let score = location_match(preference, "Bengaluru", work_type);
            assert!((30.0..=100.0).contains(&score));
        }
    }
}

#[test]
fn test_difficulty_fit_rewards_skill_count() {
    let catalog = Catalog::reference();
    let advanced = catalog.get("5").unwrap();
    assert_eq!(advanced.difficulty, Difficulty::Advanced);

    let weights = ScoringWeights::default();
    let mut previous = 0.0;
    for count in 0..8 {
        let profile = UserProfile {
            education: "None".to_string(),
            interests: vec![],
            skills: (0..count).map(|i| format!("unrelated-{}", i)).collect(),
            location: LocationPreference::online(),
        };
        let score = calculate_match_score(&profile, advanced, &weights);
        assert!(score.difficulty >= previous);
        previous = score.difficulty;
    }
    assert_eq!(previous, 100.0);
}

#[test]
fn test_custom_weights_change_composite() {
    let catalog = Catalog::reference();
    let profile = UserProfile {
        education: "BCA".to_string(),
        interests: vec![],
        skills: vec![],
        location: LocationPreference::online(),
    };

    let education_only = ScoringWeights {
        skills: 0.0,
        education: 1.0,
        interests: 0.0,
        location: 0.0,
        difficulty: 0.0,
    };

    let score = calculate_match_score(&profile, catalog.get("1").unwrap(), &education_only);
    assert_eq!(score.match_percentage, 100);

    let score = calculate_match_score(&profile, catalog.get("7").unwrap(), &education_only);
    assert_eq!(score.match_percentage, 0);
}
