use crate::infra::{
    default_service, detect_format, sample_candidates, LoggingNotifier, PlainTextDocumentSource,
    StaticTrainingPlanner, SAMPLE_DOCUMENT,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use placement_tracker::error::AppError;
use placement_tracker::workflows::placement::{
    load_document_text, Criteria, CriteriaExtractor, Notification, PlacementRunReport,
    PlacementService,
};
use placement_tracker::workflows::roster::{CandidateRosterImporter, RosterCandidateStore};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Hiring document to extract from (.txt; pdf/docx need an external extractor)
    #[arg(long)]
    pub(crate) document: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hiring document to process (defaults to a bundled sample JD)
    #[arg(long)]
    pub(crate) document: Option<PathBuf>,
    /// Candidate roster CSV (defaults to a bundled sample pool)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Run date used for notification deadlines (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the notification dispatch step
    #[arg(long)]
    pub(crate) skip_notifications: bool,
}

pub(crate) fn run_criteria_extract(args: ExtractArgs) -> Result<(), AppError> {
    let format = detect_format(&args.document)?;
    let text = load_document_text(&PlainTextDocumentSource, &args.document, format);

    let extractor = CriteriaExtractor::new();
    let criteria = extractor.extract(&text);
    render_criteria(&criteria);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        document,
        roster,
        today,
        skip_notifications,
    } = args;

    let text = match document {
        Some(path) => {
            let format = detect_format(&path)?;
            load_document_text(&PlainTextDocumentSource, &path, format)
        }
        None => SAMPLE_DOCUMENT.to_string(),
    };

    println!("Placement tracker demo");
    match roster {
        Some(path) => {
            let candidates = CandidateRosterImporter::from_path(path)?;
            println!("Candidate pool: {} imported from roster", candidates.len());
            let service = PlacementService::new(
                Arc::new(RosterCandidateStore::new(candidates)),
                Arc::new(StaticTrainingPlanner),
                Arc::new(LoggingNotifier),
            );
            run_and_render(&service, &text, today, skip_notifications)
        }
        None => {
            println!(
                "Candidate pool: {} bundled sample candidates",
                sample_candidates().len()
            );
            let service = default_service();
            run_and_render(&service, &text, today, skip_notifications)
        }
    }
}

fn run_and_render<S, P, N>(
    service: &PlacementService<S, P, N>,
    text: &str,
    today: Option<NaiveDate>,
    skip_notifications: bool,
) -> Result<(), AppError>
where
    S: placement_tracker::workflows::placement::CandidateStore + 'static,
    P: placement_tracker::workflows::placement::TrainingPlanner + 'static,
    N: placement_tracker::workflows::placement::Notifier + 'static,
{
    let report = service.process_document(text)?;
    render_report(&report);

    if !skip_notifications {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let outcomes = service.dispatch_notifications(&report, today)?;
        render_notifications(&outcomes);
    }

    Ok(())
}

fn render_criteria(criteria: &Criteria) {
    println!("Extracted criteria");
    println!("- Minimum CGPA: {}", criteria.min_cgpa);
    println!("- Must-have skills: {}", join_or_none(&criteria.must_have_skills));
    println!("- Preferred skills: {}", join_or_none(&criteria.preferred_skills));
    println!("- Minimum internships: {}", criteria.min_internships);
    println!("- Minimum projects: {}", criteria.min_projects);
    println!("- Hackathon required: {}", criteria.hackathon_required);
    println!("- Extraction coverage: {}%", criteria.coverage_percent);
}

fn render_report(report: &PlacementRunReport) {
    println!();
    render_criteria(&report.criteria);

    println!("\nEligibility");
    for result in &report.eligibility {
        println!(
            "- {} ({}): {}",
            result.name,
            result.student_id.0,
            result.status.label()
        );
        for reason in &result.reasons {
            println!("    - {reason}");
        }
    }

    println!("\nGap analysis");
    for record in &report.gap_analysis {
        println!(
            "- {} ({}): {} gap(s), priority {}",
            record.name,
            record.student_id.0,
            record.gap_count,
            record.priority.label()
        );
        for recommendation in &record.recommendations {
            println!("    - {recommendation}");
        }
    }

    let summary = report.summary();
    println!(
        "\nSummary: {} eligible, {} partially eligible, {} not eligible; \
         {} high / {} medium / {} low priority",
        summary.eligible,
        summary.partially_eligible,
        summary.not_eligible,
        summary.high_priority,
        summary.medium_priority,
        summary.low_priority
    );
}

fn render_notifications(outcomes: &[Notification]) {
    println!("\nNotifications");
    for outcome in outcomes {
        println!(
            "- {} <{}>: {} (deadline {})",
            outcome.student_id.0,
            outcome.email,
            outcome.delivery.label(),
            outcome.deadline
        );
    }
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}
