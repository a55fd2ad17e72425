//! Filesystem existence checks

use crate::report::{EntryStatus, PathKind, VerificationReport};
use playprep_core::config::{RequiredFile, VerifyConfig};
use playprep_core::{Error, Result};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Check one entry relative to `root`
///
/// Only existence is tested; content, size and format are not inspected.
/// A path that does not exist is reported as missing. Any other I/O failure,
/// such as permission denied, is returned as an error.
pub fn check_entry(root: &Path, entry: &RequiredFile) -> Result<EntryStatus> {
    let full_path = root.join(&entry.path);

    match fs::metadata(&full_path) {
        Ok(meta) => Ok(EntryStatus::present(entry.clone(), PathKind::from(meta.file_type()))),
        Err(e) => status_for_error(entry, &full_path, e),
    }
}

/// Missing for an absent path, an error for anything else
///
/// `NotADirectory` covers a path nested below a regular file.
fn status_for_error(entry: &RequiredFile, full_path: &Path, err: io::Error) -> Result<EntryStatus> {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => Ok(EntryStatus::missing(entry.clone())),
        _ => Err(Error::io_at(full_path, err).with_context(format!("While checking {}", entry.label))),
    }
}

/// Runs the configured checklist against a root directory
#[derive(Debug, Clone)]
pub struct Verifier {
    root: PathBuf,
    entries: Vec<RequiredFile>,
}

impl Verifier {
    /// Create a verifier for an explicit entry list
    pub fn new(root: impl Into<PathBuf>, entries: Vec<RequiredFile>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    /// Create a verifier for the configured checklist
    pub fn from_config(root: impl Into<PathBuf>, config: &VerifyConfig) -> Self {
        Self::new(root, config.files.clone())
    }

    /// Entries in check order
    pub fn entries(&self) -> &[RequiredFile] {
        &self.entries
    }

    /// Check every entry in order
    ///
    /// Missing entries never stop the run; the first unexpected I/O error does.
    pub fn run(&self) -> Result<VerificationReport> {
        let mut statuses = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let status = check_entry(&self.root, entry)?;
            tracing::debug!(
                label = %entry.label,
                path = %entry.path.display(),
                present = status.present,
                "Checked required file"
            );
            statuses.push(status);
        }

        let report = VerificationReport {
            root: self.root.clone(),
            entries: statuses,
        };

        tracing::info!(
            root = %self.root.display(),
            total = report.entries.len(),
            present = report.present_count(),
            "Verification complete"
        );

        Ok(report)
    }
}
