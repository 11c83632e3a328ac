use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::eligibility::domain::{
    CandidateId, CertifierInfo, ExperienceSubmission, Requirement,
};
use crate::workflows::eligibility::profile::CandidateProfile;
use crate::workflows::eligibility::repository::{CandidateRepository, RepositoryError};
use crate::workflows::eligibility::{
    eligibility_router, CertificateRequest, EligibilityService, RequirementResolver,
};

pub(super) fn today() -> NaiveDate {
    date(2024, 6, 30)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn resolver() -> RequirementResolver {
    RequirementResolver::default()
}

pub(super) fn requirement(exam_code: &str, education_code: &str) -> Requirement {
    resolver()
        .resolve(exam_code, education_code)
        .expect("requirement resolves")
}

pub(super) fn submission(facility: &str, start: &str, end: &str) -> ExperienceSubmission {
    ExperienceSubmission {
        facility_name: facility.to_string(),
        start_date: start.to_string(),
        end_marker: end.to_string(),
        reporting_compliant: true,
    }
}

pub(super) fn unreported(facility: &str, start: &str, end: &str) -> ExperienceSubmission {
    ExperienceSubmission {
        reporting_compliant: false,
        ..submission(facility, start, end)
    }
}

pub(super) fn certificate_request() -> CertificateRequest {
    CertificateRequest {
        applicant_name: "山田太郎".to_string(),
        certifier: CertifierInfo {
            company: "○○株式会社 ××工場".to_string(),
            name: "佐藤花子".to_string(),
            role: "工場長".to_string(),
        },
        issue_date: Some(today()),
    }
}

pub(super) fn build_service() -> (EligibilityService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service =
        EligibilityService::new(repository.clone()).with_evaluation_date(Some(today()));
    (service, repository)
}

pub(super) fn router_with_service(service: EligibilityService<MemoryRepository>) -> axum::Router {
    eligibility_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) profiles: Arc<Mutex<HashMap<CandidateId, CandidateProfile>>>,
}

impl CandidateRepository for MemoryRepository {
    fn insert(&self, id: CandidateId, profile: CandidateProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, profile);
        Ok(())
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &CandidateId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut CandidateProfile) -> T,
    {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        let profile = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(apply(profile))
    }
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn insert(&self, _id: CandidateId, _profile: CandidateProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn fetch(&self, _id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn modify<T, F>(&self, _id: &CandidateId, _apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut CandidateProfile) -> T,
    {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
