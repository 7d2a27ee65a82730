use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::workflows::placement::domain::{Candidate, Criteria, StudentId};
use crate::workflows::placement::notify::{EmailMessage, Notifier, NotifyError};
use crate::workflows::placement::service::PlacementService;
use crate::workflows::placement::store::{CandidateStore, StoreError};
use crate::workflows::placement::training::{TrainingError, TrainingPlanner};

pub(super) const SAMPLE_DOCUMENT: &str = "Minimum CGPA 7.5 required. Must have Python, React \
                                          skills. At least 2 internships and 3 projects. \
                                          Hackathon experience required.";

pub(super) fn sample_criteria() -> Criteria {
    Criteria {
        min_cgpa: 7.5,
        must_have_skills: vec!["Python".to_string(), "React".to_string()],
        preferred_skills: Vec::new(),
        min_internships: 2,
        min_projects: 3,
        hackathon_required: true,
        coverage_percent: 100.0,
    }
}

pub(super) fn candidate(
    id: &str,
    name: &str,
    cgpa: f64,
    skills: &[&str],
    internships: u32,
    projects: u32,
    hackathons: u32,
) -> Candidate {
    Candidate {
        student_id: StudentId(id.to_string()),
        name: name.to_string(),
        cgpa,
        skills: skills.iter().map(ToString::to_string).collect(),
        internships,
        projects,
        hackathons,
        email: format!("{}@example.edu", id.to_lowercase()),
    }
}

pub(super) fn strong_candidate() -> Candidate {
    candidate(
        "S001",
        "Aarav Sharma",
        8.2,
        &["Python", "React.js", "MongoDB"],
        2,
        4,
        1,
    )
}

pub(super) fn weak_candidate() -> Candidate {
    candidate("S002", "Diya Patel", 6.0, &["Python"], 1, 1, 0)
}

#[derive(Default)]
pub(super) struct MemoryCandidateStore {
    pub(super) candidates: Vec<Candidate>,
}

impl MemoryCandidateStore {
    pub(super) fn with(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl CandidateStore for MemoryCandidateStore {
    fn fetch_all(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.candidates.clone())
    }
}

pub(super) struct UnavailableCandidateStore;

impl CandidateStore for UnavailableCandidateStore {
    fn fetch_all(&self) -> Result<Vec<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Records every skill the pipeline asked about, so tests can assert the
/// per-run cache and the category-tag filter.
#[derive(Default)]
pub(super) struct CannedPlanner {
    pub(super) requests: Arc<Mutex<Vec<String>>>,
}

impl TrainingPlanner for CannedPlanner {
    fn plan(&self, skill: &str) -> Result<String, TrainingError> {
        self.requests
            .lock()
            .expect("planner mutex poisoned")
            .push(skill.to_string());
        Ok(format!("Study {skill} for four weeks"))
    }
}

pub(super) struct FailingPlanner;

impl TrainingPlanner for FailingPlanner {
    fn plan(&self, _skill: &str) -> Result<String, TrainingError> {
        Err(TrainingError::Generation("retrieval index offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    pub(super) sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn deliver(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(message.clone());
        Ok(())
    }
}

pub(super) struct RejectingNotifier;

impl Notifier for RejectingNotifier {
    fn deliver(&self, _message: &EmailMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp offline".to_string()))
    }
}

pub(super) fn build_service(
    candidates: Vec<Candidate>,
) -> (
    PlacementService<MemoryCandidateStore, CannedPlanner, MemoryNotifier>,
    Arc<CannedPlanner>,
    Arc<MemoryNotifier>,
) {
    let store = Arc::new(MemoryCandidateStore::with(candidates));
    let planner = Arc::new(CannedPlanner::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = PlacementService::new(store, planner.clone(), notifier.clone());
    (service, planner, notifier)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
