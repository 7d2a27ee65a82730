use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use placement_tracker::workflows::placement::{
    Candidate, CandidateStore, DocumentError, DocumentFormat, DocumentSource, EmailMessage,
    NotificationPolicy, Notifier, NotifyError, PlacementService, StoreError, StudentId,
    TrainingError, TrainingPlanner,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory candidate pool standing in for the production datastore.
pub(crate) struct InMemoryCandidateStore {
    candidates: Vec<Candidate>,
}

impl InMemoryCandidateStore {
    pub(crate) fn with_sample_pool() -> Self {
        Self {
            candidates: sample_candidates(),
        }
    }
}

impl CandidateStore for InMemoryCandidateStore {
    fn fetch_all(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.candidates.clone())
    }
}

/// Canned study plans standing in for the retrieval-augmented generator.
pub(crate) struct StaticTrainingPlanner;

impl TrainingPlanner for StaticTrainingPlanner {
    fn plan(&self, skill: &str) -> Result<String, TrainingError> {
        Ok(format!(
            "Complete an online course on {skill}, then build one portfolio project with it. \
             Target four weeks."
        ))
    }
}

/// Logs deliveries instead of talking to an SMTP relay.
pub(crate) struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn deliver(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        info!(to = %message.to, subject = %message.subject, "email dispatched (demo transport)");
        Ok(())
    }
}

/// Reads plain-text documents directly; binary containers need an external
/// extractor and degrade to empty text upstream.
pub(crate) struct PlainTextDocumentSource;

impl DocumentSource for PlainTextDocumentSource {
    fn read(&self, path: &Path, format: DocumentFormat) -> Result<String, DocumentError> {
        match format {
            DocumentFormat::PlainText => {
                std::fs::read_to_string(path).map_err(|err| DocumentError::Unreadable(err.to_string()))
            }
            other => Err(DocumentError::Unreadable(format!(
                "no extractor configured for {} documents",
                other.label()
            ))),
        }
    }
}

pub(crate) fn detect_format(path: &Path) -> Result<DocumentFormat, DocumentError> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    DocumentFormat::from_mime(mime.essence_str())
}

pub(crate) fn default_service(
) -> PlacementService<InMemoryCandidateStore, StaticTrainingPlanner, LoggingNotifier> {
    service_with_policy(NotificationPolicy::default())
}

pub(crate) fn service_with_policy(
    policy: NotificationPolicy,
) -> PlacementService<InMemoryCandidateStore, StaticTrainingPlanner, LoggingNotifier> {
    PlacementService::with_policy(
        Arc::new(InMemoryCandidateStore::with_sample_pool()),
        Arc::new(StaticTrainingPlanner),
        Arc::new(LoggingNotifier),
        policy,
    )
}

pub(crate) fn sample_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "S001",
            "Aarav Sharma",
            8.4,
            &["Python", "React", "MongoDB", "Git"],
            2,
            4,
            1,
            "aarav.sharma@example.edu",
        ),
        candidate(
            "S002",
            "Diya Patel",
            7.1,
            &["Java", "Spring Boot", "MySQL"],
            1,
            2,
            0,
            "diya.patel@example.edu",
        ),
        candidate(
            "S003",
            "Rohan Gupta",
            6.3,
            &["HTML", "CSS"],
            0,
            1,
            0,
            "rohan.gupta@example.edu",
        ),
        candidate(
            "S004",
            "Sneha Iyer",
            9.0,
            &["Python", "Machine Learning", "Docker", "AWS"],
            3,
            5,
            2,
            "sneha.iyer@example.edu",
        ),
        candidate(
            "S005",
            "Arjun Mehta",
            7.8,
            &["JavaScript", "Node.js", "React"],
            2,
            3,
            0,
            "arjun.mehta@example.edu",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    cgpa: f64,
    skills: &[&str],
    internships: u32,
    projects: u32,
    hackathons: u32,
    email: &str,
) -> Candidate {
    Candidate {
        student_id: StudentId(id.to_string()),
        name: name.to_string(),
        cgpa,
        skills: skills.iter().map(ToString::to_string).collect(),
        internships,
        projects,
        hackathons,
        email: email.to_string(),
    }
}

pub(crate) const SAMPLE_DOCUMENT: &str = "\
Graduate Software Engineer - Campus Hiring

Requirements: minimum CGPA of 7.0. Must have Python, React and MySQL skills.
Candidates need at least 1 internship and 2 projects.
Participation in a hackathon or coding competition is preferred.
";

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
