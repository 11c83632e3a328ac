use super::common::*;
use crate::workflows::eligibility::domain::{EducationTier, ExamCategory, ExperienceCategory};
use crate::workflows::eligibility::evaluation::{
    schedule_class, CodeKind, RequirementError, RuleTable, ScheduleClass,
};

#[test]
fn every_exam_code_maps_to_its_experience_category() {
    let expected = [
        ("1", ExperienceCategory::Air),
        ("2", ExperienceCategory::Air),
        ("3", ExperienceCategory::Air),
        ("4", ExperienceCategory::Air),
        ("5", ExperienceCategory::Water),
        ("6", ExperienceCategory::Water),
        ("7", ExperienceCategory::Water),
        ("8", ExperienceCategory::Water),
        ("9", ExperienceCategory::Noise),
        ("10", ExperienceCategory::Air),
        ("11", ExperienceCategory::Air),
        ("12", ExperienceCategory::Dioxin),
        ("13", ExperienceCategory::Other),
    ];
    let table = RuleTable::standard();

    assert_eq!(table.exams().len(), expected.len());
    for (code, category) in expected {
        let exam = table.exam(code).expect("exam code present");
        assert_eq!(
            exam.category.experience_category(),
            category,
            "exam {code} ({}) tagged with wrong category",
            exam.name
        );
    }
}

#[test]
fn first_grade_exams_reject_every_education_code() {
    let resolver = resolver();
    for exam_code in ["1", "5"] {
        for education_code in ["A", "B", "C", "D", "Z"] {
            match resolver.resolve(exam_code, education_code) {
                Err(RequirementError::IneligiblePath { exam_name }) => {
                    assert!(exam_name.contains("第1種"));
                }
                other => panic!("expected ineligible path for {exam_code}/{education_code}, got {other:?}"),
            }
        }
    }
}

#[test]
fn extended_schedule_applies_to_third_grade_and_chief() {
    let table = RuleTable::standard();
    let resolver = resolver();

    for exam in table.exams().iter().filter(|exam| !exam.is_first_grade()) {
        let schedule: [u32; 4] = match schedule_class(exam) {
            ScheduleClass::Extended => [5, 7, 9, 12],
            ScheduleClass::Standard => [3, 5, 7, 10],
        };
        let extended = exam.name.contains("第3種") || exam.category == ExamCategory::ChiefSupervisor;
        assert_eq!(
            schedule_class(exam) == ScheduleClass::Extended,
            extended,
            "exam {} on wrong schedule",
            exam.name
        );

        for (tier, years) in EducationTier::ordered().into_iter().zip(schedule) {
            let requirement = resolver
                .resolve(exam.code, tier.code())
                .expect("requirement resolves");
            assert_eq!(requirement.required_months(), years * 12);
            assert_eq!(requirement.required_years(), years);
            assert_eq!(requirement.education_tier(), tier);
        }
    }
}

#[test]
fn noise_vibration_with_high_school_needs_seven_years() {
    let requirement = requirement("9", "C");

    assert_eq!(requirement.exam_name(), "騒音・振動関係");
    assert_eq!(requirement.exam_category(), ExamCategory::NoiseVibration);
    assert_eq!(requirement.required_months(), 84);
    assert!(requirement.advisory_note().is_empty());
}

#[test]
fn resolution_is_repeatable() {
    let resolver = resolver();
    let first = resolver.resolve("7", "B").expect("resolves");
    let second = resolver.resolve("7", "B").expect("resolves");
    assert_eq!(first, second);
}

#[test]
fn chief_supervisor_carries_dual_coverage_note() {
    let requirement = requirement("13", "A");

    assert_eq!(requirement.required_months(), 60);
    assert!(requirement.advisory_note().contains("大気と水質"));
}

#[test]
fn unknown_codes_are_distinguished_from_ineligible_paths() {
    let resolver = resolver();

    match resolver.resolve("99", "A") {
        Err(RequirementError::UnknownCode { kind, code }) => {
            assert_eq!(kind, CodeKind::Exam);
            assert_eq!(code, "99");
        }
        other => panic!("expected unknown exam code, got {other:?}"),
    }

    let err = resolver.resolve("2", "E").expect_err("education rejected");
    assert_eq!(err.kind(), "unknown_code");
    assert!(matches!(
        err,
        RequirementError::UnknownCode {
            kind: CodeKind::Education,
            ..
        }
    ));
}

#[test]
fn codes_are_trimmed_and_education_is_case_insensitive() {
    let requirement = resolver().resolve(" 12 ", "d").expect("resolves");
    assert_eq!(requirement.exam_code(), "12");
    assert_eq!(requirement.education_tier(), EducationTier::Unconditional);
    assert_eq!(requirement.required_months(), 120);
}

#[test]
fn facility_examples_follow_exam_category() {
    let table = RuleTable::standard();
    assert!(table
        .facility_examples(ExamCategory::NoiseVibration)
        .contains(&"送風機"));
    assert!(table
        .facility_examples(ExamCategory::GeneralDust)
        .contains(&"コンベア"));
    assert!(table
        .facility_examples(ExamCategory::ChiefSupervisor)
        .contains(&"厨房施設"));
}
