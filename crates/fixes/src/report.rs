// ABOUTME: Per-file outcomes and the run-level report for a batch pass.
// ABOUTME: Carries ordered FileReport entries plus changed/skipped/error counters.

use serde::Serialize;

use crate::error::FixError;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The rewrite changed the page and it was written back.
    Changed,
    /// Nothing to do; the page was not written.
    Skipped { reason: String },
    /// Reading or writing the page failed; the batch continued.
    Failed { error: String },
}

/// One page's outcome, by file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn changed(file: impl Into<String>) -> Self {
        FileReport {
            file: file.into(),
            outcome: FileOutcome::Changed,
        }
    }

    pub fn skipped(file: impl Into<String>, reason: impl Into<String>) -> Self {
        FileReport {
            file: file.into(),
            outcome: FileOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn failed(file: impl Into<String>, error: FixError) -> Self {
        FileReport {
            file: file.into(),
            outcome: FileOutcome::Failed {
                error: error.to_string(),
            },
        }
    }
}

/// Accumulated outcomes for one run, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub changed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub entries: Vec<FileReport>,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport::default()
    }

    /// Records one page's outcome and bumps the matching counter.
    pub fn push(&mut self, entry: FileReport) {
        match entry.outcome {
            FileOutcome::Changed => self.changed += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.errors += 1,
        }
        self.entries.push(entry);
    }
}
