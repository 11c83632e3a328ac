use super::common::*;
use crate::workflows::eligibility::certificate::CertificateError;
use crate::workflows::eligibility::domain::{ExperienceCategory, YearsMonths, ONGOING_LABEL};
use crate::workflows::eligibility::evaluation::RequirementError;
use crate::workflows::eligibility::profile::{CandidateProfile, ProfileError};
use crate::workflows::eligibility::validator::{ExperienceValidator, ExperienceViolation};

fn noise_profile() -> CandidateProfile {
    let mut profile = CandidateProfile::new();
    profile
        .resolve_requirement(&resolver(), "9", "C")
        .expect("requirement resolves");
    profile
}

#[test]
fn recording_requires_an_active_requirement() {
    let mut profile = CandidateProfile::new();

    let err = profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect_err("no requirement yet");

    assert_eq!(err, ProfileError::NoActiveRequirement);
    assert!(profile.ledger().is_empty());
    assert_eq!(
        profile.progress().expect_err("no summary"),
        ProfileError::NoActiveRequirement
    );
}

#[test]
fn rejected_records_leave_ledger_untouched() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");
    let before = profile.clone();

    let err = profile
        .record_experience(
            &ExperienceValidator,
            unreported("圧縮機", "2021-06-02", "now"),
            today(),
        )
        .expect_err("unreported facility rejected");

    assert_eq!(
        err,
        ProfileError::Experience(ExperienceViolation::UnreportedFacility)
    );
    assert_eq!(profile, before);
}

#[test]
fn failed_resolution_keeps_previous_requirement() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");
    let before = profile.clone();

    let err = profile
        .resolve_requirement(&resolver(), "1", "A")
        .expect_err("first grade rejected");

    assert!(matches!(
        err,
        ProfileError::Requirement(RequirementError::IneligiblePath { .. })
    ));
    assert_eq!(profile, before);
    assert_eq!(
        profile.requirement().map(|requirement| requirement.exam_code()),
        Some("9")
    );
}

#[test]
fn re_resolution_keeps_records_and_their_tags() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");
    assert!(!profile.progress().expect("summary").satisfied);

    profile
        .resolve_requirement(&resolver(), "9", "A")
        .expect("requirement resolves");

    let progress = profile.progress().expect("summary");
    assert_eq!(progress.requirement.required_months(), 36);
    assert!(progress.satisfied);
    assert_eq!(profile.ledger().len(), 1);
    assert_eq!(
        profile.ledger().records()[0].category(),
        ExperienceCategory::Noise
    );

    profile
        .resolve_requirement(&resolver(), "6", "D")
        .expect("requirement resolves");
    assert!(!profile.progress().expect("summary").satisfied);
    assert_eq!(
        profile.ledger().records()[0].category(),
        ExperienceCategory::Noise
    );
}

#[test]
fn progress_summary_renders_records() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");
    profile
        .record_experience(
            &ExperienceValidator,
            submission("圧縮機", "2021-06-02", "現在"),
            today(),
        )
        .expect("accepted");

    let progress = profile.progress().expect("summary");

    assert_eq!(progress.total_months, 101);
    assert_eq!(progress.total, YearsMonths { years: 8, months: 5 });
    assert!(progress.satisfied);
    assert_eq!(progress.shortfall, YearsMonths::default());
    assert_eq!(progress.records[0].position, 1);
    assert_eq!(progress.records[0].duration_label, "5年5ヶ月");
    assert_eq!(progress.records[1].end_label, ONGOING_LABEL);
    assert!(progress.records[1].ongoing);
    assert!(progress.headline().contains("requirement met"));
}

#[test]
fn certificate_requires_satisfied_requirement() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2016-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");

    let err = profile
        .issue_certificate(&certificate_request(), today())
        .expect_err("requirement not met");

    assert_eq!(
        err,
        ProfileError::Certificate(CertificateError::RequirementNotMet {
            total: YearsMonths { years: 5, months: 5 },
            shortfall: YearsMonths { years: 1, months: 7 },
        })
    );
    assert!(profile.applicant_name().is_none());
}

#[test]
fn certificate_requires_every_field() {
    let mut profile = noise_profile();
    let mut request = certificate_request();
    request.certifier.role = " ".to_string();

    let err = profile
        .issue_certificate(&request, today())
        .expect_err("role missing");

    assert_eq!(
        err,
        ProfileError::Certificate(CertificateError::MissingField("certifier role"))
    );
}

#[test]
fn certificate_snapshot_freezes_profile_state() {
    let mut profile = noise_profile();
    profile
        .record_experience(
            &ExperienceValidator,
            submission("送風機", "2014-01-01", "2021-06-01"),
            today(),
        )
        .expect("accepted");

    let snapshot = profile
        .issue_certificate(&certificate_request(), today())
        .expect("certificate issued");

    assert_eq!(snapshot.applicant_name(), "山田太郎");
    assert_eq!(snapshot.requirement().exam_name(), "騒音・振動関係");
    assert_eq!(snapshot.total(), YearsMonths { years: 7, months: 5 });
    assert_eq!(snapshot.records().len(), 1);
    assert_eq!(snapshot.records()[0].duration_label, "7年5ヶ月");
    assert_eq!(snapshot.certifier().role, "工場長");
    assert_eq!(snapshot.issue_date_label(), "2024年06月30日");
    assert_eq!(profile.applicant_name(), Some("山田太郎"));
    assert_eq!(profile.issue_date(), Some(today()));
}
