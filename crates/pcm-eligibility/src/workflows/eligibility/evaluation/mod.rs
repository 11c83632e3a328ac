mod policy;
mod rules;

pub use rules::{schedule_class, RuleTable, ScheduleClass};

use std::fmt;

use super::domain::Requirement;
use serde::Serialize;

/// Which lookup table rejected a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Exam,
    Education,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Exam => f.write_str("exam"),
            CodeKind::Education => f.write_str("education"),
        }
    }
}

/// Reasons an exam and education selection cannot produce a requirement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementError {
    #[error("unknown {kind} code '{code}'")]
    UnknownCode { kind: CodeKind, code: String },
    #[error("{exam_name} cannot be applied for on education and work experience alone")]
    IneligiblePath { exam_name: String },
}

impl RequirementError {
    pub fn kind(&self) -> &'static str {
        match self {
            RequirementError::UnknownCode { .. } => "unknown_code",
            RequirementError::IneligiblePath { .. } => "ineligible_path",
        }
    }
}

/// Stateless resolver mapping an exam and education pair to its requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementResolver {
    table: RuleTable,
}

impl RequirementResolver {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn resolve(
        &self,
        exam_code: &str,
        education_code: &str,
    ) -> Result<Requirement, RequirementError> {
        let exam = self.table.exam(exam_code)?;
        policy::ensure_experience_route(exam)?;
        let education = self.table.education(education_code)?;

        let years = self
            .table
            .schedule_years(schedule_class(exam), education.tier);

        Ok(Requirement::new(
            exam,
            education,
            years * 12,
            policy::advisory_note(exam),
        ))
    }
}
