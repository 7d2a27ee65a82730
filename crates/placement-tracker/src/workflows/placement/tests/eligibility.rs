use super::common::*;
use crate::workflows::placement::domain::{CandidateMetrics, EligibilityStatus};
use crate::workflows::placement::eligibility::classify;

#[test]
fn strong_candidate_is_eligible_with_no_reasons() {
    let criteria = sample_criteria();
    let result = classify(&criteria, &strong_candidate());

    assert_eq!(result.status, EligibilityStatus::Eligible);
    assert!(result.reasons.is_empty());
}

#[test]
fn variant_skill_spelling_satisfies_the_requirement() {
    // "React" vs the candidate's "React.js" passes through the loose
    // bidirectional-substring match.
    let criteria = sample_criteria();
    let result = classify(&criteria, &strong_candidate());
    assert!(!result
        .reasons
        .iter()
        .any(|reason| reason.contains("Missing required skills")));
}

#[test]
fn weak_candidate_fails_all_five_checks() {
    let criteria = sample_criteria();
    let candidate = weak_candidate();
    let result = classify(&criteria, &candidate);

    assert_eq!(result.reasons.len(), 5);
    assert_eq!(result.status, EligibilityStatus::NotEligible);
    assert!(result.reasons[0].contains("below required 7.5"));
    assert!(result.reasons[1].contains("Missing required skills: React"));
    assert!(result.reasons[2].contains("Has 1 internship(s), requires 2"));
    assert!(result.reasons[3].contains("Has 1 project(s), requires 3"));
    assert_eq!(
        result.reasons[4],
        "Hackathon participation required but not found"
    );
    assert_eq!(result.details, CandidateMetrics::snapshot(&candidate));
}

#[test]
fn one_or_two_failures_are_partially_eligible() {
    let criteria = sample_criteria();

    let one_failure = candidate(
        "S010",
        "Rohan Gupta",
        7.0,
        &["Python", "React"],
        2,
        3,
        1,
    );
    let result = classify(&criteria, &one_failure);
    assert_eq!(result.reasons.len(), 1);
    assert_eq!(result.status, EligibilityStatus::PartiallyEligible);

    let two_failures = candidate(
        "S011",
        "Sneha Iyer",
        7.0,
        &["Python", "React"],
        1,
        3,
        1,
    );
    let result = classify(&criteria, &two_failures);
    assert_eq!(result.reasons.len(), 2);
    assert_eq!(result.status, EligibilityStatus::PartiallyEligible);
}

#[test]
fn hackathon_check_only_applies_when_required() {
    let mut criteria = sample_criteria();
    criteria.hackathon_required = false;

    let candidate = candidate("S012", "Arjun Mehta", 8.0, &["Python", "React"], 2, 3, 0);
    let result = classify(&criteria, &candidate);
    assert_eq!(result.status, EligibilityStatus::Eligible);
}

#[test]
fn unfilled_criteria_accept_everyone() {
    let criteria = crate::workflows::placement::domain::Criteria::unfilled();
    let result = classify(&criteria, &weak_candidate());
    assert_eq!(result.status, EligibilityStatus::Eligible);
}
