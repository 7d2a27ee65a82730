use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Criteria, EligibilityResult, GapRecord};
use super::extraction::CriteriaExtractor;
use super::notify::{self, Notification, NotificationPolicy, Notifier};
use super::pipeline::{self, RunSummary};
use super::store::{CandidateStore, StoreError};
use super::training::{self, TrainingPlan, TrainingPlanner};

/// Facade composing the extractor, the two classification engines, and the
/// collaborators for one placement run.
pub struct PlacementService<S, P, N> {
    extractor: CriteriaExtractor,
    store: Arc<S>,
    planner: Arc<P>,
    notifier: Arc<N>,
    policy: NotificationPolicy,
}

impl<S, P, N> PlacementService<S, P, N>
where
    S: CandidateStore + 'static,
    P: TrainingPlanner + 'static,
    N: Notifier + 'static,
{
    pub fn new(store: Arc<S>, planner: Arc<P>, notifier: Arc<N>) -> Self {
        Self::with_policy(store, planner, notifier, NotificationPolicy::default())
    }

    pub fn with_policy(
        store: Arc<S>,
        planner: Arc<P>,
        notifier: Arc<N>,
        policy: NotificationPolicy,
    ) -> Self {
        Self {
            extractor: CriteriaExtractor::new(),
            store,
            planner,
            notifier,
            policy,
        }
    }

    /// Run the pipeline over one document: fetch the snapshot, extract
    /// criteria, classify, analyze gaps, and assemble training plans.
    ///
    /// A store failure is fatal to the run and distinct from an empty pool:
    /// an empty candidate list still yields `Ok` with empty result sets.
    pub fn process_document(
        &self,
        document_text: &str,
    ) -> Result<PlacementRunReport, PlacementError> {
        let candidates = self.store.fetch_all()?;
        info!(
            candidates = candidates.len(),
            "processing hiring document against candidate snapshot"
        );

        let criteria = self.extractor.extract(document_text);
        let (eligibility, gap_analysis) = pipeline::evaluate_snapshot(&criteria, &candidates);
        let training = training::generate_training_plans(self.planner.as_ref(), &gap_analysis);

        let report = PlacementRunReport {
            criteria,
            eligibility,
            gap_analysis,
            training,
        };
        let summary = report.summary();
        info!(
            eligible = summary.eligible,
            partially_eligible = summary.partially_eligible,
            not_eligible = summary.not_eligible,
            high_priority = summary.high_priority,
            "placement run complete"
        );
        Ok(report)
    }

    /// Deliver per-candidate outcome e-mails for an already-produced report.
    /// Runs after the core completes; per-candidate delivery failures are
    /// recorded in the returned outcomes and never alter the report.
    pub fn dispatch_notifications(
        &self,
        report: &PlacementRunReport,
        today: NaiveDate,
    ) -> Result<Vec<Notification>, PlacementError> {
        let candidates = self.store.fetch_all()?;
        Ok(notify::dispatch_notifications(
            self.notifier.as_ref(),
            &self.policy,
            &candidates,
            &report.eligibility,
            &report.gap_analysis,
            &report.training,
            today,
        ))
    }
}

/// Everything one run produced. Result collections correlate strictly by
/// student id, never by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRunReport {
    pub criteria: Criteria,
    pub eligibility: Vec<EligibilityResult>,
    pub gap_analysis: Vec<GapRecord>,
    pub training: Vec<TrainingPlan>,
}

impl PlacementRunReport {
    pub fn summary(&self) -> RunSummary {
        pipeline::summarize(&self.eligibility, &self.gap_analysis)
    }
}

/// Error raised by the placement service.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
