use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pcm_eligibility::workflows::eligibility::{
    CandidateId, CandidateProfile, CandidateRepository, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store; every candidate gets its own profile.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    profiles: Arc<Mutex<HashMap<CandidateId, CandidateProfile>>>,
}

impl InMemoryCandidateRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<CandidateId, CandidateProfile>>, RepositoryError> {
        self.profiles
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store mutex poisoned".to_string()))
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, id: CandidateId, profile: CandidateProfile) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, profile);
        Ok(())
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &CandidateId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut CandidateProfile) -> T,
    {
        let mut guard = self.lock()?;
        let profile = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(apply(profile))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_runs_against_stored_profile() {
        let repository = InMemoryCandidateRepository::default();
        let id = CandidateId("cand-test".to_string());
        repository
            .insert(id.clone(), CandidateProfile::new())
            .expect("insert succeeds");

        let empty = repository
            .modify(&id, |profile| profile.ledger().is_empty())
            .expect("session exists");

        assert!(empty);
        assert!(matches!(
            repository.insert(id, CandidateProfile::new()),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn modify_reports_missing_session() {
        let repository = InMemoryCandidateRepository::default();
        let result = repository.modify(&CandidateId("nope".to_string()), |_| ());
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2024/02/29").is_err());
    }
}
