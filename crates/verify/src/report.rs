//! Verification results

use playprep_core::config::RequiredFile;
use playprep_core::{Error, Result};
use serde::Serialize;
use std::fs::FileType;
use std::path::PathBuf;

/// Kind of filesystem object found at an entry's path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Anything else (device, socket, fifo)
    Other,
}

impl From<FileType> for PathKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_file() {
            PathKind::File
        } else if file_type.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        }
    }
}

/// Outcome of checking one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryStatus {
    /// The configured entry
    #[serde(flatten)]
    pub entry: RequiredFile,
    /// Whether the path exists
    pub present: bool,
    /// What was found, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PathKind>,
}

impl EntryStatus {
    /// Entry found on disk
    pub fn present(entry: RequiredFile, kind: PathKind) -> Self {
        Self {
            entry,
            present: true,
            kind: Some(kind),
        }
    }

    /// Entry not found
    pub fn missing(entry: RequiredFile) -> Self {
        Self {
            entry,
            present: false,
            kind: None,
        }
    }
}

/// Verdict over all entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// Every entry exists
    AllPresent,
    /// At least one entry is missing
    SomeMissing,
}

/// Result of one verification run, in configured order
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Directory entry paths were resolved against
    pub root: PathBuf,
    /// Per-entry results
    pub entries: Vec<EntryStatus>,
}

impl VerificationReport {
    /// Conjunction of every entry's `present` flag
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.entries.iter().all(|e| e.present)
    }

    /// Aggregate verdict
    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        if self.all_present() {
            Aggregate::AllPresent
        } else {
            Aggregate::SomeMissing
        }
    }

    /// Entries that were not found
    pub fn missing(&self) -> impl Iterator<Item = &EntryStatus> {
        self.entries.iter().filter(|e| !e.present)
    }

    /// Number of entries found
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    /// `MissingFiles` error unless every entry was found
    pub fn require_all_present(&self) -> Result<()> {
        match self.missing().count() {
            0 => Ok(()),
            missing => Err(Error::missing_files(missing, self.entries.len())),
        }
    }
}
