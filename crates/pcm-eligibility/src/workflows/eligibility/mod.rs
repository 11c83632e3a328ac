//! Work-experience eligibility for pollution control manager certification courses.
//!
//! A candidate first resolves a [`Requirement`] from an exam and education code,
//! then records experience intervals that are validated into an append-only
//! [`ExperienceLedger`]. Once the ledger covers the requirement a
//! [`CertificateSnapshot`] can be handed to a document renderer.

pub mod certificate;
pub mod domain;
pub mod evaluation;
pub mod import;
pub mod ledger;
pub mod profile;
pub mod repository;
pub mod router;
pub mod service;
pub mod validator;
pub mod views;

#[cfg(test)]
mod tests;

pub use certificate::{CertificateError, CertificateRequest, CertificateSnapshot};
pub use domain::{
    CandidateId, CertifierInfo, EducationDefinition, EducationTier, ExamCategory,
    ExamDefinition, ExamGrade, ExperienceCategory, ExperienceEnd, ExperienceRecord,
    ExperienceSubmission, Requirement, YearsMonths, ONGOING_LABEL,
};
pub use evaluation::{
    CodeKind, RequirementError, RequirementResolver, RuleTable, ScheduleClass,
};
pub use import::{ExperienceCsvImporter, ExperienceImportError};
pub use ledger::ExperienceLedger;
pub use profile::{CandidateProfile, ProfileError};
pub use repository::{CandidateRepository, RepositoryError};
pub use router::{eligibility_router, RequirementRequest};
pub use service::{EligibilityService, EligibilityServiceError};
pub use validator::{DateField, ExperienceValidator, ExperienceViolation};
pub use views::{Catalogue, ExperienceReceipt, ExperienceRecordView, ProgressSummary};
