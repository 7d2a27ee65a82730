//! Gap analysis: the same five checks as eligibility classification,
//! re-evaluated independently to produce gap tags, shortfall reasons, and
//! remediation recommendations instead of eligibility reasons.
//!
//! The duplication with `eligibility` is intentional and mirrors the two
//! result shapes; only the token-level skill match is shared. If one rule
//! set changes, change the other.

use super::domain::{Candidate, Criteria, GapPriority, GapRecord};
use super::matching;

/// Build the gap record for one candidate. Total over a resolved candidate;
/// the snapshot lookup that can make a record absent lives in the pipeline.
pub fn analyze(criteria: &Criteria, candidate: &Candidate) -> GapRecord {
    let mut gaps = Vec::new();
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();

    let missing = matching::missing_skills(&criteria.must_have_skills, &candidate.skills);
    if !missing.is_empty() {
        reasons.push(format!("Missing technical skills: {}", missing.join(", ")));
        recommendations.push(format!(
            "Learn {} through online courses and projects",
            missing.join(", ")
        ));
        gaps.extend(missing);
    }

    if candidate.cgpa < criteria.min_cgpa {
        gaps.push("cgpa".to_string());
        reasons.push(format!(
            "CGPA {} is below required {}",
            candidate.cgpa, criteria.min_cgpa
        ));
        recommendations.push("Focus on improving academic performance".to_string());
    }

    if candidate.internships < criteria.min_internships {
        let shortfall = criteria.min_internships - candidate.internships;
        gaps.push("internships".to_string());
        reasons.push(format!("Need {shortfall} more internship(s)"));
        recommendations.push("Apply for internships to gain practical experience".to_string());
    }

    if candidate.projects < criteria.min_projects {
        let shortfall = criteria.min_projects - candidate.projects;
        gaps.push("projects".to_string());
        reasons.push(format!("Need {shortfall} more project(s)"));
        recommendations.push("Build portfolio projects to demonstrate skills".to_string());
    }

    if criteria.hackathon_required && candidate.hackathons == 0 {
        gaps.push("hackathons".to_string());
        reasons.push("Hackathon participation required".to_string());
        recommendations.push("Participate in coding competitions and hackathons".to_string());
    }

    let gap_count = gaps.len();
    GapRecord {
        student_id: candidate.student_id.clone(),
        name: candidate.name.clone(),
        gaps,
        reasons,
        recommendations,
        priority: GapPriority::from_gap_count(gap_count),
        gap_count,
    }
}
