//! Outcome of a scaffold run (or dry run), for display and JSON output.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ArtifactKind, EntryKind, ScaffoldStep};

/// What happened to a single planned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStatus {
    /// Written by this run.
    Created,
    /// Already present; left untouched.
    Existing,
    /// Dry run only: would be written.
    WouldCreate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactKind>,
    pub status: EntryStatus,
}

/// Ordered list of entries, one per plan step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub dry_run: bool,
    pub entries: Vec<ReportEntry>,
}

impl ScaffoldReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            entries: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, step: &ScaffoldStep, status: EntryStatus) {
        self.entries.push(ReportEntry {
            path: step.path().to_path_buf(),
            kind: step.entry_kind(),
            artifact: step.artifact(),
            status,
        });
    }

    pub fn with_status(&self, status: EntryStatus) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }

    /// Entries written (or, in a dry run, to be written).
    pub fn written(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.status != EntryStatus::Existing)
    }

    pub fn status_of(&self, path: &Path) -> Option<EntryStatus> {
        self.entries.iter().find(|e| e.path == path).map(|e| e.status)
    }
}
