//! Deterministic heuristic extraction of structured criteria from free-form
//! hiring document text. This is a pattern-cascade extractor, not a semantic
//! parser: ambiguous or adversarial wording may under- or over-populate the
//! result, and that is accepted behavior.

mod patterns;
mod vocabulary;

use super::domain::Criteria;
use patterns::PatternCascade;

/// Total extractor: `extract` never fails and always returns a fully
/// populated record, degrading field by field to zeroed defaults.
pub struct CriteriaExtractor {
    cgpa: PatternCascade<f64>,
    internships: PatternCascade<u32>,
    projects: PatternCascade<u32>,
}

impl CriteriaExtractor {
    pub fn new() -> Self {
        Self {
            cgpa: patterns::cgpa_cascade(),
            internships: patterns::internship_cascade(),
            projects: patterns::project_cascade(),
        }
    }

    pub fn extract(&self, document_text: &str) -> Criteria {
        let normalized = document_text.to_lowercase();
        let normalized = normalized.trim();
        if normalized.is_empty() {
            return Criteria::unfilled();
        }

        let min_cgpa = self.cgpa.first_match(normalized).unwrap_or(0.0);

        let discovered = vocabulary::scan_skills(normalized);
        let requires_all = vocabulary::REQUIREMENT_MARKERS
            .iter()
            .any(|marker| normalized.contains(marker));
        let (must_have_skills, preferred_skills) = partition_skills(discovered, requires_all);

        // Counts keep a keyword-only fallback: a document that mentions
        // internships or projects without a number still implies at least
        // one. CGPA has no such fallback.
        let mut min_internships = self.internships.first_match(normalized).unwrap_or(0);
        if min_internships == 0 && normalized.contains("internship") {
            min_internships = 1;
        }
        let mut min_projects = self.projects.first_match(normalized).unwrap_or(0);
        if min_projects == 0 && normalized.contains("project") {
            min_projects = 1;
        }

        let hackathon_required = vocabulary::HACKATHON_INDICATORS
            .iter()
            .any(|indicator| normalized.contains(indicator));

        let coverage_percent = coverage(&[
            min_cgpa > 0.0,
            !must_have_skills.is_empty(),
            min_internships > 0,
            min_projects > 0,
            hackathon_required,
        ]);

        Criteria {
            min_cgpa,
            must_have_skills,
            preferred_skills,
            min_internships,
            min_projects,
            hackathon_required,
            coverage_percent,
        }
    }
}

impl Default for CriteriaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A document that marks anything as mandatory promotes the first five
/// discovered skills to must-have; otherwise the first three are must-have
/// and the next up to five are preferred.
fn partition_skills(discovered: Vec<String>, requires_all: bool) -> (Vec<String>, Vec<String>) {
    if requires_all {
        let must_have = discovered.into_iter().take(5).collect();
        (must_have, Vec::new())
    } else {
        let mut remaining = discovered.into_iter();
        let must_have = remaining.by_ref().take(3).collect();
        let preferred = remaining.take(5).collect();
        (must_have, preferred)
    }
}

fn coverage(indicators: &[bool]) -> f64 {
    let filled = indicators.iter().filter(|indicator| **indicator).count();
    let percent = 100.0 * filled as f64 / indicators.len() as f64;
    (percent * 100.0).round() / 100.0
}
