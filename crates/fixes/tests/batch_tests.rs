// ABOUTME: Integration tests for the batch driver over real temp directories.
// ABOUTME: Covers the write gate, error isolation, exclusions, and idempotence.

use std::fs;
use std::path::Path;

use blogfix_fixes::{
    blog_pages, run_fix, ConvertFaqs, FileOutcome, ScrubCorruption, SKIP_UNCHANGED,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CORRUPTED: &str =
    "<p>Intro</p>\n    param($match)\n    $junk = 1\n    @\"\n<p>Outro</p>";
const CLEAN: &str = "<p>Nothing wrong here.</p>";
const FAQ: &str = "<p><strong>Q: Works?</strong><br/>A: Yes.</p>";

fn write_page(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn scrub_rewrites_only_corrupted_pages() {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "bad-post.html", CORRUPTED);
    write_page(tmp.path(), "good-post.html", CLEAN);

    let pages = blog_pages(tmp.path()).unwrap();
    let report = run_fix(&pages, &ScrubCorruption);

    assert_eq!(report.changed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);

    let cleaned = fs::read_to_string(tmp.path().join("bad-post.html")).unwrap();
    assert_eq!(cleaned, "<p>Intro</p><p>Outro</p>");

    // Untouched page keeps its exact bytes.
    let untouched = fs::read_to_string(tmp.path().join("good-post.html")).unwrap();
    assert_eq!(untouched, CLEAN);
}

#[test]
fn marker_without_structural_match_counts_as_skip() {
    let tmp = TempDir::new().unwrap();
    // Detection fires on <strong>Q: but the pair is not paragraph-wrapped.
    write_page(
        tmp.path(),
        "loose.html",
        "<div><strong>Q: Loose?</strong> free-floating</div>",
    );

    let pages = blog_pages(tmp.path()).unwrap();
    let report = run_fix(&pages, &ConvertFaqs);

    assert_eq!(report.changed, 0);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        report.entries[0].outcome,
        FileOutcome::Skipped {
            reason: SKIP_UNCHANGED.to_string()
        }
    );
}

#[test]
fn excluded_pages_are_never_rewritten() {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "index.html", CORRUPTED);
    write_page(tmp.path(), "blog-post-template.html", FAQ);
    write_page(tmp.path(), "post.html", CORRUPTED);

    let pages = blog_pages(tmp.path()).unwrap();
    run_fix(&pages, &ScrubCorruption);

    assert_eq!(
        fs::read_to_string(tmp.path().join("index.html")).unwrap(),
        CORRUPTED
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("blog-post-template.html")).unwrap(),
        FAQ
    );
    assert!(!fs::read_to_string(tmp.path().join("post.html"))
        .unwrap()
        .contains("param($match)"));
}

#[test]
fn read_failure_does_not_abort_the_batch() {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "a.html", CORRUPTED);
    write_page(tmp.path(), "c.html", CORRUPTED);
    // A directory where a page is expected: read_to_string fails on it.
    let bogus = tmp.path().join("b.html");
    fs::create_dir(&bogus).unwrap();

    let files = vec![
        tmp.path().join("a.html"),
        bogus,
        tmp.path().join("c.html"),
    ];
    let report = run_fix(&files, &ScrubCorruption);

    assert_eq!(report.changed, 2);
    assert_eq!(report.errors, 1);
    assert!(matches!(
        report.entries[1].outcome,
        FileOutcome::Failed { .. }
    ));
    // Both healthy pages were still rewritten.
    assert!(!fs::read_to_string(tmp.path().join("a.html"))
        .unwrap()
        .contains("param($match)"));
    assert!(!fs::read_to_string(tmp.path().join("c.html"))
        .unwrap()
        .contains("param($match)"));
}

#[test]
fn second_run_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "faq-post.html", FAQ);

    let pages = blog_pages(tmp.path()).unwrap();
    let first = run_fix(&pages, &ConvertFaqs);
    assert_eq!(first.changed, 1);

    let converted = fs::read_to_string(tmp.path().join("faq-post.html")).unwrap();
    assert!(converted.contains("<details"));

    let second = run_fix(&pages, &ConvertFaqs);
    assert_eq!(second.changed, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("faq-post.html")).unwrap(),
        converted
    );
}

#[test]
fn outcomes_follow_selection_order() {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "b.html", CLEAN);
    write_page(tmp.path(), "a.html", CORRUPTED);

    let pages = blog_pages(tmp.path()).unwrap();
    let report = run_fix(&pages, &ScrubCorruption);

    let names: Vec<_> = report.entries.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(names, vec!["a.html", "b.html"]);
}
