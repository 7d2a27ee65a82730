//! Eligibility classification: five independent checks over one candidate.

use super::domain::{Candidate, CandidateMetrics, Criteria, EligibilityResult, EligibilityStatus};
use super::matching;

/// Classify one candidate against the extracted criteria. Total: every
/// candidate receives exactly one result, and all five checks run
/// unconditionally so the reason list reflects every shortfall, not just the
/// first. The final status is a function of the reason count alone.
pub fn classify(criteria: &Criteria, candidate: &Candidate) -> EligibilityResult {
    let mut reasons = Vec::new();

    if candidate.cgpa < criteria.min_cgpa {
        reasons.push(format!(
            "CGPA {} is below required {}",
            candidate.cgpa, criteria.min_cgpa
        ));
    }

    let missing = matching::missing_skills(&criteria.must_have_skills, &candidate.skills);
    if !missing.is_empty() {
        reasons.push(format!("Missing required skills: {}", missing.join(", ")));
    }

    if candidate.internships < criteria.min_internships {
        reasons.push(format!(
            "Has {} internship(s), requires {}",
            candidate.internships, criteria.min_internships
        ));
    }

    if candidate.projects < criteria.min_projects {
        reasons.push(format!(
            "Has {} project(s), requires {}",
            candidate.projects, criteria.min_projects
        ));
    }

    if criteria.hackathon_required && candidate.hackathons == 0 {
        reasons.push("Hackathon participation required but not found".to_string());
    }

    EligibilityResult {
        student_id: candidate.student_id.clone(),
        name: candidate.name.clone(),
        status: EligibilityStatus::from_reason_count(reasons.len()),
        reasons,
        details: CandidateMetrics::snapshot(candidate),
    }
}
