// ABOUTME: Page selection for the blog directory.
// ABOUTME: Lists candidate HTML files non-recursively, minus the index and template pages.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FixError;

/// Extension of the page files the rewrite passes touch (case-sensitive).
pub const PAGE_EXTENSION: &str = "html";

/// Pages that must never be rewritten, by exact file name.
pub const EXCLUDED_PAGES: &[&str] = &["index.html", "blog-post-template.html"];

/// Where the published posts live, relative to the site root.
pub const DEFAULT_BLOG_DIR: &str = "pages/blog";

/// Lists candidate pages directly inside `dir`, sorted by path.
///
/// Keeps regular files whose extension matches `extension` exactly and
/// whose file name is not in `excluded`. Subdirectories are never entered.
/// A failure to read the directory itself propagates; it is the one fatal
/// condition for a run.
pub fn select_pages(
    dir: &Path,
    extension: &str,
    excluded: &[&str],
) -> Result<Vec<PathBuf>, FixError> {
    let entries = fs::read_dir(dir).map_err(|e| FixError::list_dir(dir, e))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FixError::list_dir(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if excluded.contains(&name) {
            continue;
        }
        pages.push(path);
    }

    // Stable order for reproducible logs.
    pages.sort();
    Ok(pages)
}

/// Candidate blog posts under `dir` with the fixed extension and exclusions.
pub fn blog_pages(dir: &Path) -> Result<Vec<PathBuf>, FixError> {
    select_pages(dir, PAGE_EXTENSION, EXCLUDED_PAGES)
}
