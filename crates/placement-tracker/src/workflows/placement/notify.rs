use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Candidate, EligibilityResult, EligibilityStatus, GapRecord, StudentId};
use super::training::TrainingPlan;

/// Outbound e-mail delivery lives outside the core.
pub trait Notifier: Send + Sync {
    fn deliver(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Rendered message handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Per-candidate delivery outcome. Failures here never affect the
/// already-produced eligibility or gap results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
    Pending,
}

impl DeliveryStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Failed => "failed",
            DeliveryStatus::Pending => "pending",
        }
    }
}

/// Structured notification record, one per candidate that resolves in the
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub student_id: StudentId,
    pub email: String,
    pub status: EligibilityStatus,
    pub message: String,
    pub gaps: Vec<String>,
    pub training_plan: String,
    pub deadline: NaiveDate,
    pub delivery: DeliveryStatus,
}

/// Knobs for the notification step, passed in at construction instead of
/// read from process-wide state.
#[derive(Debug, Clone)]
pub struct NotificationPolicy {
    pub deadline_days: i64,
    pub subject: String,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            deadline_days: 30,
            subject: "Eligibility & Training Plan Update".to_string(),
        }
    }
}

/// Join the three result collections by student id and deliver one e-mail
/// per resolvable candidate. A missing gap record means no gaps; a missing
/// training plan means no plan; a candidate absent from the snapshot is
/// logged and skipped.
pub fn dispatch_notifications<N>(
    notifier: &N,
    policy: &NotificationPolicy,
    candidates: &[Candidate],
    eligibility: &[EligibilityResult],
    gap_records: &[GapRecord],
    training: &[TrainingPlan],
    today: NaiveDate,
) -> Vec<Notification>
where
    N: Notifier + ?Sized,
{
    let by_id: HashMap<&StudentId, &Candidate> = candidates
        .iter()
        .map(|candidate| (&candidate.student_id, candidate))
        .collect();
    let deadline = today + Duration::days(policy.deadline_days);

    let mut outcomes = Vec::with_capacity(eligibility.len());
    for result in eligibility {
        let Some(candidate) = by_id.get(&result.student_id) else {
            warn!(
                student_id = %result.student_id.0,
                "candidate missing from snapshot, skipping notification"
            );
            continue;
        };

        let gaps = gap_records
            .iter()
            .find(|record| record.student_id == result.student_id)
            .map(|record| record.gaps.clone())
            .unwrap_or_default();
        let training_plan = training
            .iter()
            .find(|plan| plan.student_id == result.student_id)
            .map(|plan| plan.plan.clone())
            .unwrap_or_default();

        let message = if result.status == EligibilityStatus::Eligible {
            "See training plan."
        } else {
            "Improve profile."
        };

        let mut notification = Notification {
            student_id: result.student_id.clone(),
            email: candidate.email.clone(),
            status: result.status,
            message: message.to_string(),
            gaps,
            training_plan,
            deadline,
            delivery: DeliveryStatus::Pending,
        };

        let email = render_email(candidate, &notification, policy);
        match notifier.deliver(&email) {
            Ok(()) => notification.delivery = DeliveryStatus::Sent,
            Err(error) => {
                warn!(email = %candidate.email, %error, "notification delivery failed");
                notification.message = format!("Email failed: {error}");
                notification.delivery = DeliveryStatus::Failed;
            }
        }
        outcomes.push(notification);
    }
    outcomes
}

fn render_email(
    candidate: &Candidate,
    notification: &Notification,
    policy: &NotificationPolicy,
) -> EmailMessage {
    let gap_text = if notification.gaps.is_empty() {
        "None".to_string()
    } else {
        notification.gaps.join(", ")
    };
    let training = if notification.training_plan.is_empty() {
        "No training plan available."
    } else {
        notification.training_plan.as_str()
    };

    let html_body = format!(
        "<h3>Hello {name},</h3>\n\
         <p><strong>Status:</strong> {status}</p>\n\
         <p><strong>Gaps:</strong> {gap_text}</p>\n\
         <p><strong>Training Plan:</strong></p>\n\
         <pre>{training}</pre>\n\
         <p><strong>Deadline:</strong> {deadline}</p>\n\
         <p>Regards,<br>Placement Team</p>",
        name = candidate.name,
        status = notification.status.label(),
        deadline = notification.deadline,
    );

    EmailMessage {
        to: candidate.email.clone(),
        subject: policy.subject.clone(),
        html_body,
    }
}
