// ABOUTME: Batch maintenance library for the blog's static HTML pages.
// ABOUTME: Re-exports page selection, the rewrite passes, the batch driver, and run reports.

//! blogfix - batch maintenance passes for the blog's static HTML pages.
//!
//! The library side of the `blogfix` tool. It provides two rewrite passes
//! (the corruption scrubber and the FAQ-to-dropdown converter), the card
//! generator for the blog index, and the sequential driver that applies a
//! pass to every candidate page and reports per-file outcomes.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use blogfix_fixes::{blog_pages, run_fix, ScrubCorruption};
//!
//! fn main() -> Result<(), blogfix_fixes::FixError> {
//!     let pages = blog_pages(Path::new("pages/blog"))?;
//!     let report = run_fix(&pages, &ScrubCorruption);
//!     println!("cleaned {} pages", report.changed);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cards;
pub mod error;
pub mod faq;
pub mod report;
pub mod scrub;
pub mod select;

pub use crate::batch::{run_fix, PageFix, SKIP_UNCHANGED};
pub use crate::cards::{render_card, render_cards, Category, Post, PUBLISHED_POSTS};
pub use crate::error::FixError;
pub use crate::faq::{convert_faqs, has_faq_markup, ConvertFaqs};
pub use crate::report::{FileOutcome, FileReport, RunReport};
pub use crate::scrub::{is_corrupted, scrub_corruption, ScrubCorruption};
pub use crate::select::{
    blog_pages, select_pages, DEFAULT_BLOG_DIR, EXCLUDED_PAGES, PAGE_EXTENSION,
};
