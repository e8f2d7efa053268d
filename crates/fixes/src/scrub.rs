// ABOUTME: Scrubber for script fragments left behind by a botched batch edit.
// ABOUTME: Removes parameterized code blocks and stray variable tokens from page text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::batch::PageFix;

/// Opener marker of an embedded code block.
const BLOCK_OPENER: &str = "param($match)";

/// Stray variable token that flags a corrupted page on its own.
const STRAY_QUESTION: &str = "$question";

// A corrupted block runs from the opener through the `@"` terminator,
// non-greedily, across line breaks. The terminator alone never matches.
static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)\s*param\(\$match\).*?@"\s*"#).unwrap());

// Variable references left outside any block.
static STRAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$question|\$answer").unwrap());

/// Cheap scan for the corruption markers.
///
/// Pages without either marker are not worth running through the full
/// rewrite at all.
pub fn is_corrupted(html: &str) -> bool {
    html.contains(BLOCK_OPENER) || html.contains(STRAY_QUESTION)
}

/// Removes every corrupted code block, then every stray variable token.
///
/// Text outside the removed spans is preserved exactly, whitespace
/// included. An opener with no later terminator is left in place.
pub fn scrub_corruption(html: &str) -> String {
    let without_blocks = BLOCK_RE.replace_all(html, "");
    STRAY_RE.replace_all(&without_blocks, "").into_owned()
}

/// The scrubber as a batch pass.
pub struct ScrubCorruption;

impl PageFix for ScrubCorruption {
    fn applies(&self, html: &str) -> bool {
        is_corrupted(html)
    }

    fn skip_reason(&self) -> &'static str {
        "No corruption found"
    }

    fn apply(&self, html: &str) -> String {
        scrub_corruption(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_opener_and_stray_token() {
        assert!(is_corrupted("<p>x</p> param($match) junk"));
        assert!(is_corrupted("<p>$question</p>"));
        assert!(!is_corrupted("<p>an ordinary page</p>"));
    }

    #[test]
    fn removes_block_between_opener_and_terminator() {
        let html = "<p>Intro</p>\n    param($match)\n    $q = \"junk\"\n    @\"\n<p>After</p>";
        let cleaned = scrub_corruption(html);

        assert_eq!(cleaned, "<p>Intro</p><p>After</p>");
    }

    #[test]
    fn removes_every_block_in_one_pass() {
        let html = concat!(
            "<h1>Title</h1>\n",
            "param($match) one @\"\n",
            "<p>Middle stays</p>\n",
            "param($match) two @\"\n",
            "<p>End stays</p>"
        );
        let cleaned = scrub_corruption(html);

        assert!(!cleaned.contains("param($match)"));
        assert!(cleaned.contains("<p>Middle stays</p>"));
        assert!(cleaned.contains("<p>End stays</p>"));
        assert!(cleaned.contains("<h1>Title</h1>"));
    }

    #[test]
    fn bare_terminator_is_left_alone() {
        let html = "<p>Prices start at @\" per unit</p>";

        assert!(!is_corrupted(html));
        assert_eq!(scrub_corruption(html), html);
    }

    #[test]
    fn unterminated_opener_is_left_in_place() {
        let html = "<p>Before</p>\nparam($match) never closed\n<p>After</p>";

        assert_eq!(scrub_corruption(html), html);
    }

    #[test]
    fn strips_stray_variable_tokens() {
        let html = "<p>$question</p><p>$answer</p>";

        assert_eq!(scrub_corruption(html), "<p></p><p></p>");
    }

    #[test]
    fn scrub_is_idempotent() {
        let html = "<p>Keep</p> param($match) drop @\" <span>$answer</span>";
        let once = scrub_corruption(html);
        let twice = scrub_corruption(&once);

        assert_eq!(once, twice);
    }
}
