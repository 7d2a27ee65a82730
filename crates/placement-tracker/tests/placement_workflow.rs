//! Integration scenarios for the placement run workflow, exercised through
//! the public service facade and HTTP router so extraction, classification,
//! gap analysis, training, and notification are validated end to end.

mod common {
    use std::sync::{Arc, Mutex};

    use placement_tracker::workflows::placement::{
        Candidate, EmailMessage, Notifier, NotifyError, PlacementService, StudentId, TrainingError,
        TrainingPlanner,
    };
    use placement_tracker::workflows::roster::{CandidateRosterImporter, RosterCandidateStore};

    pub(super) const SAMPLE_DOCUMENT: &str =
        "Minimum CGPA 7.5 required. Must have Python, React skills. At least 2 internships and \
         3 projects. Hackathon experience required.";

    pub(super) const SAMPLE_ROSTER: &str = "\
Student ID,Name,CGPA,Skills,Internships,Projects,Hackathons,Email
S001,Aarav Sharma,8.2,Python;React.js;MongoDB,2,4,1,aarav@example.edu
S002,Diya Patel,6.0,Python,1,1,0,diya@example.edu
S003,Rohan Gupta,7.9,Java;Spring Boot;MySQL,2,3,1,rohan@example.edu
";

    pub(super) fn roster_candidates() -> Vec<Candidate> {
        CandidateRosterImporter::from_reader(SAMPLE_ROSTER.as_bytes()).expect("roster parses")
    }

    pub(super) struct StaticPlanner;

    impl TrainingPlanner for StaticPlanner {
        fn plan(&self, skill: &str) -> Result<String, TrainingError> {
            Ok(format!("Complete an online course on {skill}"))
        }
    }

    #[derive(Default)]
    pub(super) struct RecordingNotifier {
        pub(super) deliveries: Arc<Mutex<Vec<EmailMessage>>>,
    }

    impl Notifier for RecordingNotifier {
        fn deliver(&self, message: &EmailMessage) -> Result<(), NotifyError> {
            self.deliveries
                .lock()
                .expect("notifier mutex poisoned")
                .push(message.clone());
            Ok(())
        }
    }

    pub(super) fn build_service() -> (
        PlacementService<RosterCandidateStore, StaticPlanner, RecordingNotifier>,
        Arc<RecordingNotifier>,
    ) {
        let store = Arc::new(RosterCandidateStore::new(roster_candidates()));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = PlacementService::new(store, Arc::new(StaticPlanner), notifier.clone());
        (service, notifier)
    }

    pub(super) fn student(id: &str) -> StudentId {
        StudentId(id.to_string())
    }
}

use chrono::NaiveDate;
use common::*;
use placement_tracker::workflows::placement::{
    DeliveryStatus, EligibilityStatus, GapPriority,
};

#[test]
fn roster_import_feeds_a_complete_placement_run() {
    let (service, _) = build_service();

    let report = service
        .process_document(SAMPLE_DOCUMENT)
        .expect("run succeeds");

    assert_eq!(report.criteria.min_cgpa, 7.5);
    assert!(report.criteria.hackathon_required);
    assert_eq!(report.eligibility.len(), 3);
    assert_eq!(report.gap_analysis.len(), 3);

    let aarav = report
        .eligibility
        .iter()
        .find(|result| result.student_id == student("S001"))
        .expect("S001 classified");
    assert_eq!(aarav.status, EligibilityStatus::Eligible);

    let diya = report
        .eligibility
        .iter()
        .find(|result| result.student_id == student("S002"))
        .expect("S002 classified");
    assert_eq!(diya.status, EligibilityStatus::NotEligible);
    assert_eq!(diya.reasons.len(), 5);

    let diya_gaps = report
        .gap_analysis
        .iter()
        .find(|record| record.student_id == student("S002"))
        .expect("S002 analyzed");
    assert_eq!(diya_gaps.gap_count, 5);
    assert_eq!(diya_gaps.priority, GapPriority::High);
}

#[test]
fn skill_false_positives_are_preserved_end_to_end() {
    // "java" satisfying a "javascript" requirement is the documented loose
    // matching policy; it must survive the full pipeline.
    let (service, _) = build_service();
    let report = service
        .process_document("Required skills: javascript and node.js developers wanted.")
        .expect("run succeeds");

    let rohan = report
        .eligibility
        .iter()
        .find(|result| result.student_id == student("S003"))
        .expect("S003 classified");
    assert!(!rohan
        .reasons
        .iter()
        .any(|reason| reason.contains("Javascript")));
}

#[test]
fn notifications_cover_every_resolvable_candidate() {
    let (service, notifier) = build_service();
    let report = service
        .process_document(SAMPLE_DOCUMENT)
        .expect("run succeeds");

    let today = NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date");
    let outcomes = service
        .dispatch_notifications(&report, today)
        .expect("dispatch succeeds");

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes
        .iter()
        .all(|outcome| outcome.delivery == DeliveryStatus::Sent));

    let deliveries = notifier.deliveries.lock().expect("notifier mutex poisoned");
    assert_eq!(deliveries.len(), 3);
    assert!(deliveries
        .iter()
        .any(|message| message.to == "diya@example.edu"));
}
