use super::domain::Candidate;

/// Read-only access to the tracked candidate pool. The core fetches one
/// snapshot per pipeline run and never writes back.
pub trait CandidateStore: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Candidate>, StoreError>;
}

/// Store failures are fatal to a run: callers must be able to distinguish
/// "the store was unreachable" from "the pool is empty".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("candidate store unavailable: {0}")]
    Unavailable(String),
}
