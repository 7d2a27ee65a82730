//! Candidate roster ingestion from CSV exports, and the store adapter that
//! serves an imported roster as a read-only snapshot.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::workflows::placement::domain::Candidate;
use crate::workflows::placement::store::{CandidateStore, StoreError};

pub struct CandidateRosterImporter;

impl CandidateRosterImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Candidate>, RosterImportError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, RosterImportError> {
        Ok(parser::parse_records(reader)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to open roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Serves an imported roster as the candidate snapshot.
pub struct RosterCandidateStore {
    candidates: Vec<Candidate>,
}

impl RosterCandidateStore {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl CandidateStore for RosterCandidateStore {
    fn fetch_all(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.candidates.clone())
    }
}
