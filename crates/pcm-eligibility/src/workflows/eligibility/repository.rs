use super::domain::CandidateId;
use super::profile::CandidateProfile;

/// Storage seam keeping each candidate session isolated from the others.
///
/// `modify` must hold the session exclusively while `apply` runs so that
/// concurrent requests for one candidate are serialized.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, id: CandidateId, profile: CandidateProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError>;
    fn modify<T, F>(&self, id: &CandidateId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut CandidateProfile) -> T;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("candidate session already exists")]
    Conflict,
    #[error("candidate session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
