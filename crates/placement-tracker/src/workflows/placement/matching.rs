//! Skill token matching shared by the eligibility and gap engines.

/// Loose bidirectional-substring comparison between a required skill and a
/// candidate skill. Both sides are trimmed and lower-cased, then matched if
/// either contains the other or they are equal.
///
/// The looseness is deliberate: it tolerates variant spellings such as
/// "react" vs "react.js", at the cost of known false positives for short
/// tokens ("c" matches "c++", "java" matches "javascript"). Do not tighten
/// this policy without revisiting every consumer.
pub fn skill_matches(required: &str, candidate: &str) -> bool {
    let required = required.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();
    required == candidate || candidate.contains(&required) || required.contains(&candidate)
}

/// Required skills with no match among the candidate's skills, in the order
/// they were required.
pub fn missing_skills(required: &[String], candidate_skills: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| {
            !candidate_skills
                .iter()
                .any(|have| skill_matches(skill, have))
        })
        .cloned()
        .collect()
}
