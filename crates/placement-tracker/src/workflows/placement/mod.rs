//! Hiring-document extraction, eligibility classification, gap analysis,
//! and the pipeline composing them over one candidate snapshot.
//!
//! The decision logic lives in `extraction`, `matching`, `eligibility`, and
//! `gaps`; everything else is orchestration around those four. Gap analysis
//! deliberately re-evaluates the same checks as classification because the
//! two produce different artifact shapes; the duplication is flagged in the
//! module docs of `gaps`.

pub mod documents;
pub mod domain;
pub mod eligibility;
pub mod extraction;
pub mod gaps;
pub mod matching;
pub mod notify;
pub mod pipeline;
pub mod router;
pub mod service;
pub mod store;
pub mod training;

#[cfg(test)]
mod tests;

pub use documents::{load_document_text, DocumentError, DocumentFormat, DocumentSource};
pub use domain::{
    Candidate, CandidateMetrics, Criteria, EligibilityResult, EligibilityStatus, GapPriority,
    GapRecord, StudentId,
};
pub use extraction::CriteriaExtractor;
pub use notify::{
    DeliveryStatus, EmailMessage, Notification, NotificationPolicy, Notifier, NotifyError,
};
pub use pipeline::RunSummary;
pub use router::placement_router;
pub use service::{PlacementError, PlacementRunReport, PlacementService};
pub use store::{CandidateStore, StoreError};
pub use training::{TrainingError, TrainingPlan, TrainingPlanner, CATEGORY_GAP_TAGS};
