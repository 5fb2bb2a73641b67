// Integration tests for the matching engine against the reference catalog

use internship_match::core::{match_internships, Matcher};
use internship_match::models::{LocationPreference, MatchResult, UserProfile};
use internship_match::Catalog;

fn create_profile(
    education: &str,
    interests: &[&str],
    skills: &[&str],
    location: LocationPreference,
) -> UserProfile {
    UserProfile {
        education: education.to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        location,
    }
}

fn frontend_profile() -> UserProfile {
    create_profile(
        "B.Tech - Computer Science",
        &["web-dev"],
        &["JavaScript", "React"],
        LocationPreference::online(),
    )
}

fn ids(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.internship.id.as_str()).collect()
}

fn position(results: &[MatchResult], id: &str) -> Option<usize> {
    results.iter().position(|r| r.internship.id == id)
}

fn sample_profiles() -> Vec<UserProfile> {
    vec![
        frontend_profile(),
        create_profile("", &[], &[], LocationPreference::online()),
        create_profile("12th Grade", &[], &[], LocationPreference::online()),
        create_profile(
            "MCA",
            &["ai-ml", "data-science"],
            &["Python", "Machine Learning", "SQL", "TensorFlow", "Research", "AI"],
            LocationPreference::offline(["Pune"]),
        ),
        create_profile(
            "BBA",
            &["business-analysis", "project-mgmt", "content-writing"],
            &["Excel", "Communication", "SEO"],
            LocationPreference::offline(["Delhi", "Mumbai"]),
        ),
        create_profile(
            "Diploma - Computer Science",
            &["cybersecurity"],
            &["a", "e", "i", "o", "u", "n", "r", "s", "t", "l"],
            LocationPreference::offline(["Chennai"]),
        ),
    ]
}

#[test]
fn test_frontend_profile_ranking() {
    let results = match_internships(&frontend_profile());

    let first = position(&results, "1").expect("frontend internship should be recommended");
    let content = position(&results, "8").expect("content writing internship clears the cut-off");
    assert!(first < content);

    // skills 50, education 100, interests 100, location 50, difficulty 100
    assert_eq!(results[0].internship.id, "1");
    assert_eq!(results[0].match_percentage, 75);
    assert_eq!(
        results[0].match_reasons,
        vec!["Perfect education fit", "Matches your interests"]
    );

    // Mobile internship: "React" overlaps "React Native"
    assert_eq!(results[1].internship.id, "4");
    assert_eq!(results[1].match_percentage, 73);

    assert_eq!(ids(&results), vec!["1", "4", "8", "2", "3", "6", "5"]);
}

#[test]
fn test_content_writing_reasons_for_online_user() {
    let results = match_internships(&frontend_profile());
    let content = &results[position(&results, "8").unwrap()];

    assert_eq!(content.match_percentage, 45);
    assert_eq!(
        content.match_reasons,
        vec!["Perfect education fit", "Great location match", "Remote work preference"]
    );
}

#[test]
fn test_hybrid_location_ignores_city_overlap() {
    let matcher = Matcher::with_defaults();
    let catalog = Catalog::reference();
    let mumbai_hybrid = catalog.get("3").unwrap();

    let in_mumbai = create_profile("BBA", &[], &["SEO"], LocationPreference::offline(["Mumbai"]));
    let elsewhere = create_profile("BBA", &[], &["SEO"], LocationPreference::offline(["Kochi"]));

    assert_eq!(matcher.score(&in_mumbai, mumbai_hybrid).location, 90.0);
    assert_eq!(matcher.score(&elsewhere, mumbai_hybrid).location, 90.0);
}

#[test]
fn test_on_site_city_overlap() {
    let matcher = Matcher::with_defaults();
    let catalog = Catalog::reference();
    let pune = catalog.get("5").unwrap();

    let in_pune = create_profile("MCA", &[], &[], LocationPreference::offline(["pune"]));
    let in_kochi = create_profile("MCA", &[], &[], LocationPreference::offline(["Kochi"]));

    assert_eq!(matcher.score(&in_pune, pune).location, 100.0);
    assert_eq!(matcher.score(&in_kochi, pune).location, 30.0);
}

#[test]
fn test_profile_without_skills_or_interests() {
    let profile = create_profile("12th Grade", &[], &[], LocationPreference::online());
    let results = match_internships(&profile);

    // Only education wildcard/match + location + difficulty can contribute
    assert_eq!(ids(&results), vec!["8", "3"]);
    assert_eq!(results[0].match_percentage, 43);
    assert_eq!(results[1].match_percentage, 36);
}

#[test]
fn test_education_wildcard_always_scores() {
    let matcher = Matcher::with_defaults();
    let catalog = Catalog::reference();

    for education in ["", "PhD Astrophysics", "Class 10", "MBA - Finance"] {
        let profile = create_profile(education, &[], &[], LocationPreference::online());
        for id in ["3", "8"] {
            let score = matcher.score(&profile, catalog.get(id).unwrap());
            assert_eq!(score.education, 100.0, "education {:?} on {}", education, id);
        }
    }
}

#[test]
fn test_output_bounds_and_ordering() {
    for profile in sample_profiles() {
        let results = match_internships(&profile);

        assert!(results.len() <= 8);
        for result in &results {
            assert!(result.match_percentage > 20 && result.match_percentage <= 100);
            assert!(!result.match_reasons.is_empty());
        }

        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
            if pair[0].match_percentage == pair[1].match_percentage {
                let catalog = Catalog::reference();
                let a = catalog.iter().position(|i| i.id == pair[0].internship.id).unwrap();
                let b = catalog.iter().position(|i| i.id == pair[1].internship.id).unwrap();
                assert!(a < b, "ties must keep catalog order");
            }
        }
    }
}

#[test]
fn test_matching_is_idempotent() {
    for profile in sample_profiles() {
        assert_eq!(match_internships(&profile), match_internships(&profile));
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    let expected = match_internships(&frontend_profile());

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| match_internships(&frontend_profile())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_skill_heavy_profile_hits_skill_reason() {
    let profile = create_profile(
        "MCA",
        &["ai-ml"],
        &["Python", "Machine Learning", "AI", "TensorFlow", "Research", "SQL"],
        LocationPreference::offline(["Pune"]),
    );
    let results = match_internships(&profile);

    let research = &results[position(&results, "5").unwrap()];
    assert_eq!(research.match_percentage, 100);
    assert_eq!(
        research.match_reasons,
        vec![
            "100% skill match",
            "Perfect education fit",
            "Matches your interests",
            "Great location match",
        ]
    );
    assert_eq!(results[0].internship.id, "5");
}
