use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    EducationTier, ExamCategory, ExperienceCategory, ExperienceRecord, Requirement, YearsMonths,
};
use super::evaluation::{schedule_class, RuleTable, ScheduleClass};
use super::ledger::ExperienceLedger;

/// Display row for one accepted experience record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceRecordView {
    pub position: usize,
    pub facility_name: String,
    pub start_date: NaiveDate,
    pub end_label: String,
    pub ongoing: bool,
    pub duration_months: u32,
    pub duration_label: String,
    pub category: ExperienceCategory,
}

impl ExperienceRecordView {
    pub fn from_record(position: usize, record: &ExperienceRecord) -> Self {
        Self {
            position,
            facility_name: record.facility_name().to_string(),
            start_date: record.start_date(),
            end_label: record.end().label(),
            ongoing: record.end().is_ongoing(),
            duration_months: record.duration_months(),
            duration_label: record.duration().to_string(),
            category: record.category(),
        }
    }

    pub(crate) fn from_ledger(ledger: &ExperienceLedger) -> Vec<Self> {
        ledger
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(index + 1, record))
            .collect()
    }
}

/// Running totals against the active requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub requirement: Requirement,
    pub total: YearsMonths,
    pub total_months: u32,
    pub satisfied: bool,
    pub shortfall: YearsMonths,
    pub months_by_category: BTreeMap<ExperienceCategory, u32>,
    pub records: Vec<ExperienceRecordView>,
}

impl ProgressSummary {
    pub fn new(requirement: &Requirement, ledger: &ExperienceLedger) -> Self {
        Self {
            requirement: requirement.clone(),
            total: ledger.total_as_years_months(),
            total_months: ledger.total_months(),
            satisfied: ledger.is_satisfied(requirement),
            shortfall: ledger.shortfall_as_years_months(requirement),
            months_by_category: ledger.months_by_category(),
            records: ExperienceRecordView::from_ledger(ledger),
        }
    }

    pub fn headline(&self) -> String {
        let required = self.requirement.required_years();
        if self.satisfied {
            format!(
                "{} accumulated / {} years required: requirement met",
                self.total, required
            )
        } else {
            format!(
                "{} accumulated / {} years required: {} still needed",
                self.total, required, self.shortfall
            )
        }
    }
}

/// Outcome of accepting one experience record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceReceipt {
    pub record: ExperienceRecordView,
    pub progress: ProgressSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamOption {
    pub code: &'static str,
    pub name: &'static str,
    pub category: ExamCategory,
    pub category_label: &'static str,
    pub schedule: ScheduleClass,
    pub experience_route: bool,
    pub facility_examples: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationOption {
    pub code: &'static str,
    pub name: &'static str,
    pub tier: EducationTier,
}

/// Selectable exams and education levels for intake forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    pub exams: Vec<ExamOption>,
    pub educations: Vec<EducationOption>,
}

impl Catalogue {
    pub fn from_table(table: &RuleTable) -> Self {
        let exams = table
            .exams()
            .iter()
            .map(|exam| ExamOption {
                code: exam.code,
                name: exam.name,
                category: exam.category,
                category_label: exam.category.label(),
                schedule: schedule_class(exam),
                experience_route: !exam.is_first_grade(),
                facility_examples: table.facility_examples(exam.category),
            })
            .collect();
        let educations = table
            .educations()
            .iter()
            .map(|education| EducationOption {
                code: education.code,
                name: education.name,
                tier: education.tier,
            })
            .collect();

        Self { exams, educations }
    }
}
