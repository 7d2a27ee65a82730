//! Pure pipeline stages composing the two engines over one immutable
//! candidate snapshot. Candidates are evaluated independently, so order
//! never affects results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{
    Candidate, Criteria, EligibilityResult, EligibilityStatus, GapPriority, GapRecord, StudentId,
};
use super::{eligibility, gaps};

/// Classify every candidate in the snapshot (the classifier never drops
/// one), then derive gap records for each eligibility entry whose candidate
/// resolves in the snapshot.
pub fn evaluate_snapshot(
    criteria: &Criteria,
    candidates: &[Candidate],
) -> (Vec<EligibilityResult>, Vec<GapRecord>) {
    let eligibility: Vec<EligibilityResult> = candidates
        .iter()
        .map(|candidate| eligibility::classify(criteria, candidate))
        .collect();
    let gap_records = gap_records_for(criteria, &eligibility, candidates);
    (eligibility, gap_records)
}

/// Gap records for the candidates present in both the eligibility results
/// and the snapshot. An eligibility entry with no matching candidate is
/// logged and skipped, so the returned list may be shorter than the
/// eligibility list; that is a valid outcome, not an error.
pub fn gap_records_for(
    criteria: &Criteria,
    eligibility: &[EligibilityResult],
    candidates: &[Candidate],
) -> Vec<GapRecord> {
    let by_id: HashMap<&StudentId, &Candidate> = candidates
        .iter()
        .map(|candidate| (&candidate.student_id, candidate))
        .collect();

    let mut records = Vec::with_capacity(eligibility.len());
    for result in eligibility {
        match by_id.get(&result.student_id) {
            Some(candidate) => records.push(gaps::analyze(criteria, candidate)),
            None => warn!(
                student_id = %result.student_id.0,
                "candidate missing from snapshot, skipping gap analysis"
            ),
        }
    }
    records
}

/// Per-status and per-priority counts over one run's results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub eligible: usize,
    pub partially_eligible: usize,
    pub not_eligible: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

pub fn summarize(eligibility: &[EligibilityResult], gap_records: &[GapRecord]) -> RunSummary {
    let mut summary = RunSummary::default();
    for result in eligibility {
        match result.status {
            EligibilityStatus::Eligible => summary.eligible += 1,
            EligibilityStatus::PartiallyEligible => summary.partially_eligible += 1,
            EligibilityStatus::NotEligible => summary.not_eligible += 1,
        }
    }
    for record in gap_records {
        match record.priority {
            GapPriority::High => summary.high_priority += 1,
            GapPriority::Medium => summary.medium_priority += 1,
            GapPriority::Low => summary.low_priority += 1,
        }
    }
    summary
}
