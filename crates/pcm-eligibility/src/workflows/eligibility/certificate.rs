use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CertifierInfo, Requirement, YearsMonths};
use super::ledger::ExperienceLedger;
use super::views::ExperienceRecordView;

/// Reasons the experience certificate cannot be issued yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateError {
    #[error("{0} is required for the certificate")]
    MissingField(&'static str),
    #[error("accumulated experience {total} is {shortfall} short of the requirement")]
    RequirementNotMet {
        total: YearsMonths,
        shortfall: YearsMonths,
    },
}

impl CertificateError {
    pub fn kind(&self) -> &'static str {
        match self {
            CertificateError::MissingField(_) => "missing_field",
            CertificateError::RequirementNotMet { .. } => "requirement_not_met",
        }
    }
}

/// Applicant and certifier details collected right before export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub applicant_name: String,
    pub certifier: CertifierInfo,
    /// Defaults to the evaluation date when omitted.
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
}

impl CertificateRequest {
    pub(crate) fn check_complete(&self) -> Result<(), CertificateError> {
        let fields = [
            ("applicant name", &self.applicant_name),
            ("certifier company", &self.certifier.company),
            ("certifier name", &self.certifier.name),
            ("certifier role", &self.certifier.role),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((label, _)) => Err(CertificateError::MissingField(*label)),
            None => Ok(()),
        }
    }
}

/// Frozen copy of everything the certificate shows.
///
/// Layout and file production belong to the renderer; it reads these values as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateSnapshot {
    applicant_name: String,
    requirement: Requirement,
    total: YearsMonths,
    records: Vec<ExperienceRecordView>,
    certifier: CertifierInfo,
    issue_date: NaiveDate,
    issue_date_label: String,
}

impl CertificateSnapshot {
    pub(crate) fn capture(
        request: &CertificateRequest,
        requirement: &Requirement,
        ledger: &ExperienceLedger,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            applicant_name: request.applicant_name.trim().to_string(),
            requirement: requirement.clone(),
            total: ledger.total_as_years_months(),
            records: ExperienceRecordView::from_ledger(ledger),
            certifier: CertifierInfo {
                company: request.certifier.company.trim().to_string(),
                name: request.certifier.name.trim().to_string(),
                role: request.certifier.role.trim().to_string(),
            },
            issue_date,
            issue_date_label: issue_date.format("%Y年%m月%d日").to_string(),
        }
    }

    pub fn applicant_name(&self) -> &str {
        &self.applicant_name
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn total(&self) -> YearsMonths {
        self.total
    }

    pub fn records(&self) -> &[ExperienceRecordView] {
        &self.records
    }

    pub fn certifier(&self) -> &CertifierInfo {
        &self.certifier
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn issue_date_label(&self) -> &str {
        &self.issue_date_label
    }
}
