use serde::{Deserialize, Serialize};

/// Identifier wrapper keying every per-candidate result collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Tracked candidate profile as fetched from the candidate store. The core
/// treats a fetched batch as a read-only snapshot for one pipeline run.
///
/// Serde defaults encode the documented missing-field rules in one place:
/// cgpa 0.0, empty skills, zero counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub student_id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub internships: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub hackathons: u32,
    #[serde(default)]
    pub email: String,
}

/// Structured eligibility requirements extracted from one hiring document.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub min_cgpa: f64,
    pub must_have_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_internships: u32,
    pub min_projects: u32,
    pub hackathon_required: bool,
    /// Share of the five extraction indicators that were populated, rounded
    /// to two decimals. A fill-rate heuristic, not a measure of semantic
    /// completeness.
    pub coverage_percent: f64,
}

impl Criteria {
    /// The record produced when nothing could be extracted.
    pub fn unfilled() -> Self {
        Self {
            min_cgpa: 0.0,
            must_have_skills: Vec::new(),
            preferred_skills: Vec::new(),
            min_internships: 0,
            min_projects: 0,
            hackathon_required: false,
            coverage_percent: 0.0,
        }
    }
}

/// Final eligibility tier for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    PartiallyEligible,
    NotEligible,
}

impl EligibilityStatus {
    /// Tiering is a function of the number of failed checks alone,
    /// independent of which checks failed.
    pub fn from_reason_count(reasons: usize) -> Self {
        match reasons {
            0 => Self::Eligible,
            1 | 2 => Self::PartiallyEligible,
            _ => Self::NotEligible,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::PartiallyEligible => "partially_eligible",
            EligibilityStatus::NotEligible => "not_eligible",
        }
    }
}

/// Verbatim snapshot of the metrics that were evaluated, carried on the
/// result so downstream consumers never re-fetch the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetrics {
    pub cgpa: f64,
    pub skills: Vec<String>,
    pub internships: u32,
    pub projects: u32,
    pub hackathons: u32,
}

impl CandidateMetrics {
    pub fn snapshot(candidate: &Candidate) -> Self {
        Self {
            cgpa: candidate.cgpa,
            skills: candidate.skills.clone(),
            internships: candidate.internships,
            projects: candidate.projects,
            hackathons: candidate.hackathons,
        }
    }
}

/// Per-candidate classification outcome. The classifier emits exactly one
/// of these for every candidate in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub student_id: StudentId,
    pub name: String,
    pub status: EligibilityStatus,
    pub reasons: Vec<String>,
    pub details: CandidateMetrics,
}

/// Remediation urgency derived from the gap count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    Low,
    Medium,
    High,
}

impl GapPriority {
    pub fn from_gap_count(gaps: usize) -> Self {
        if gaps > 3 {
            Self::High
        } else if gaps > 1 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GapPriority::Low => "low",
            GapPriority::Medium => "medium",
            GapPriority::High => "high",
        }
    }
}

/// Gap-oriented view of the same five checks. `gaps` holds one tag per
/// missing skill plus one fixed tag per failing category
/// (cgpa/internships/projects/hackathons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub student_id: StudentId,
    pub name: String,
    pub gaps: Vec<String>,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority: GapPriority,
    pub gap_count: usize,
}
