// ABOUTME: Sequential batch driver shared by the page rewrite passes.
// ABOUTME: Defines the PageFix seam and runs read, detect, rewrite, conditional write per file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FixError;
use crate::report::{FileReport, RunReport};

/// Reason reported when the cheap scan fired but the rewrite changed nothing.
pub const SKIP_UNCHANGED: &str = "No changes made";

/// One rewrite pass over a page, as seen by the driver.
pub trait PageFix {
    /// Cheap scan for the markers this pass rewrites. Pages that fail it
    /// are skipped without running the full rewrite.
    fn applies(&self, html: &str) -> bool;

    /// Reason reported when `applies` says there is nothing to do.
    fn skip_reason(&self) -> &'static str;

    /// Full rewrite of the page text. Pure; the driver decides whether the
    /// result goes back to disk.
    fn apply(&self, html: &str) -> String;
}

/// Runs one pass over `files` sequentially.
///
/// Each file is read whole, rewritten in memory, and written back only
/// when the rewritten text differs byte-for-byte from what was read.
/// Read and write failures are folded into the report per file; the batch
/// always continues to the next file.
pub fn run_fix(files: &[PathBuf], fix: &dyn PageFix) -> RunReport {
    let mut report = RunReport::new();
    for path in files {
        report.push(process_page(path, fix));
    }
    report
}

fn process_page(path: &Path, fix: &dyn PageFix) -> FileReport {
    let name = page_name(path);

    let html = match fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => return FileReport::failed(name, FixError::read(path, e)),
    };

    if !fix.applies(&html) {
        return FileReport::skipped(name, fix.skip_reason());
    }

    let rewritten = fix.apply(&html);
    if rewritten == html {
        return FileReport::skipped(name, SKIP_UNCHANGED);
    }

    match fs::write(path, &rewritten) {
        Ok(()) => FileReport::changed(name),
        Err(e) => FileReport::failed(name, FixError::write(path, e)),
    }
}

fn page_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
