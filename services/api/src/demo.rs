use crate::infra::InMemoryCandidateRepository;
use chrono::{Local, NaiveDate};
use clap::Args;
use pcm_eligibility::config::AppConfig;
use pcm_eligibility::error::AppError;
use pcm_eligibility::workflows::eligibility::{
    CandidateProfile, CertificateRequest, CertifierInfo, EligibilityService,
    ExperienceCsvImporter, ExperienceSubmission, ExperienceValidator, ProgressSummary,
    Requirement, RequirementResolver, RuleTable,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Exam code (1-13)
    #[arg(long)]
    pub(crate) exam: String,
    /// Education code (A-D)
    #[arg(long)]
    pub(crate) education: String,
    /// CSV with `facility,start,end,reported` columns
    #[arg(long)]
    pub(crate) experiences: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to APP_EVALUATION_DATE, then today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        exam,
        education,
        experiences,
        today,
    } = args;

    let config = AppConfig::load()?;
    let today = today
        .or(config.eligibility.evaluation_date)
        .unwrap_or_else(|| Local::now().date_naive());

    let resolver = RequirementResolver::default();
    let mut profile = CandidateProfile::new();
    let requirement = profile
        .resolve_requirement(&resolver, &exam, &education)?
        .clone();
    render_requirement(&requirement, resolver.table());

    let submissions = match experiences {
        Some(path) => ExperienceCsvImporter::from_path(path)?,
        None => Vec::new(),
    };

    println!("\nExperience (evaluated {today})");
    if submissions.is_empty() {
        println!("- none submitted");
    }
    for submission in submissions {
        let facility = submission.facility_name.clone();
        match profile.record_experience(&ExperienceValidator, submission, today) {
            Ok(record) => println!(
                "- accepted {}: {} -> {} ({})",
                record.facility_name(),
                record.start_date(),
                record.end().label(),
                record.duration()
            ),
            Err(err) => println!("- rejected {facility}: {err}"),
        }
    }

    render_progress(&profile.progress()?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let repository = Arc::new(InMemoryCandidateRepository::default());
    let service = EligibilityService::new(repository).with_evaluation_date(Some(today));

    println!("Eligibility walkthrough (evaluated {today})");

    println!("\n1. Noise/vibration grade 2 with a high-school background");
    let candidate = service.open_session()?;
    let requirement = service.resolve(&candidate, "9", "C")?;
    render_requirement(&requirement, service.resolver().table());
    let receipt = service.record_experience(
        &candidate,
        demo_submission("送風機", "2016-01-01", "2021-06-01", true),
    )?;
    render_progress(&receipt.progress);

    println!("\n2. Adding an ongoing record");
    let receipt = service.record_experience(
        &candidate,
        demo_submission("圧縮機", "2021-06-02", "現在", true),
    )?;
    render_progress(&receipt.progress);
    if receipt.progress.satisfied {
        let snapshot = service.issue_certificate(
            &candidate,
            CertificateRequest {
                applicant_name: "山田太郎".to_string(),
                certifier: CertifierInfo {
                    company: "○○株式会社 ××工場".to_string(),
                    name: "佐藤花子".to_string(),
                    role: "工場長".to_string(),
                },
                issue_date: None,
            },
        )?;
        println!(
            "Certificate ready for {} ({} records, {} total, issued {})",
            snapshot.applicant_name(),
            snapshot.records().len(),
            snapshot.total(),
            snapshot.issue_date_label()
        );
    }

    println!("\n3. First-grade air exam");
    let candidate = service.open_session()?;
    match service.resolve(&candidate, "1", "A") {
        Ok(requirement) => render_requirement(&requirement, service.resolver().table()),
        Err(err) => println!("- rejected: {err}"),
    }

    println!("\n4. Facility without reporting compliance");
    let candidate = service.open_session()?;
    service.resolve(&candidate, "9", "C")?;
    match service.record_experience(
        &candidate,
        demo_submission("送風機", "2016-01-01", "2021-06-01", false),
    ) {
        Ok(receipt) => render_progress(&receipt.progress),
        Err(err) => println!("- rejected: {err}"),
    }
    render_progress(&service.progress(&candidate)?);

    Ok(())
}

fn demo_submission(facility: &str, start: &str, end: &str, reported: bool) -> ExperienceSubmission {
    ExperienceSubmission {
        facility_name: facility.to_string(),
        start_date: start.to_string(),
        end_marker: end.to_string(),
        reporting_compliant: reported,
    }
}

fn render_requirement(requirement: &Requirement, table: &RuleTable) {
    println!(
        "Requirement: {} [{}] / {} -> {} years ({} months) of practical experience",
        requirement.exam_name(),
        requirement.exam_category().label(),
        requirement.education_name(),
        requirement.required_years(),
        requirement.required_months()
    );
    let examples = table.facility_examples(requirement.exam_category());
    if !examples.is_empty() {
        println!("Qualifying facilities include: {}", examples.join(", "));
    }
    if !requirement.advisory_note().is_empty() {
        println!("{}", requirement.advisory_note());
    }
}

fn render_progress(progress: &ProgressSummary) {
    println!("\nAccepted records");
    if progress.records.is_empty() {
        println!("- none");
    }
    for record in &progress.records {
        println!(
            "- #{} {} [{}]: {} -> {} ({})",
            record.position,
            record.facility_name,
            record.category.label(),
            record.start_date,
            record.end_label,
            record.duration_label
        );
    }
    println!("{}", progress.headline());
}
