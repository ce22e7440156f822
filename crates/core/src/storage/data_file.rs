use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::dataset::RawDataset;

/// Finds and reads the price history file from a fixed list of candidates.
#[derive(Debug, Clone)]
pub struct DataFileLocator {
    candidates: Vec<PathBuf>,
}

impl DataFileLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Resolve every relative candidate against `root`.
    pub fn rooted_at(root: &Path, candidates: &[PathBuf]) -> Self {
        Self::new(candidates.iter().map(|c| root.join(c)).collect())
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// The first candidate that exists as a regular file.
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .find(|p| p.is_file())
            .map(PathBuf::as_path)
    }

    /// Locate, read and decode the data file.
    ///
    /// - `DataFileNotFound` if no candidate exists.
    /// - `MalformedJson` if the file isn't valid JSON.
    /// - `UnrecognizedShape` if it is JSON in none of the accepted layouts.
    pub fn load(&self) -> Result<(PathBuf, RawDataset), CoreError> {
        let path = self.locate().ok_or(CoreError::DataFileNotFound)?;
        let bytes = std::fs::read(path)?;
        let dataset = RawDataset::from_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            shape = %dataset.shape(),
            records = dataset.record_count(),
            "loaded data file"
        );
        Ok((path.to_path_buf(), dataset))
    }
}
