// ABOUTME: Converter for legacy plain-text Q:/A: markup in post pages.
// ABOUTME: Rewrites matched pairs into collapsible details/summary dropdown widgets.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::batch::PageFix;

// Case-insensitive marker scan; the cheap check before the full rewrite.
static FAQ_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<strong>Q:").unwrap());

// One legacy pair: a paragraph wrapping a bolded question, a line break,
// then the answer with an optional "A:" prefix. The \s* after the <br/>
// bridges line breaks between question and answer.
static FAQ_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<p><strong>Q:\s*([^<]+)</strong><br/>\s*(?:A:\s*)?([^<]+)</p>").unwrap()
});

/// Whether the page carries any legacy FAQ markup at all.
pub fn has_faq_markup(html: &str) -> bool {
    FAQ_MARKER_RE.is_match(html)
}

/// Rewrites every legacy Q:/A: pair into a dropdown widget.
///
/// Question and answer are trimmed before insertion and the literal "A:"
/// prefix never survives into the output. Pairs that do not match the
/// structural pattern are left untouched.
pub fn convert_faqs(html: &str) -> String {
    FAQ_RE
        .replace_all(html, |caps: &Captures| {
            dropdown(caps[1].trim(), caps[2].trim())
        })
        .into_owned()
}

// The open/closed affordance is structural: <details> hides the answer
// region until toggled, and the chevron flips via the group-open class.
fn dropdown(question: &str, answer: &str) -> String {
    format!(
        r#"<details class="group bg-surface/30 border border-border rounded-lg overflow-hidden mb-4">
          <summary class="cursor-pointer px-6 py-4 font-semibold flex justify-between items-center hover:bg-surface/50 transition-colors">
            <span>{question}</span>
            <svg class="w-5 h-5 transition-transform group-open:rotate-180" fill="none" stroke="currentColor" viewBox="0 0 24 24">
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
            </svg>
          </summary>
          <div class="px-6 py-4 text-text-secondary border-t border-border">
            <p>{answer}</p>
          </div>
        </details>"#
    )
}

/// The FAQ converter as a batch pass.
pub struct ConvertFaqs;

impl PageFix for ConvertFaqs {
    fn applies(&self, html: &str) -> bool {
        has_faq_markup(html)
    }

    fn skip_reason(&self) -> &'static str {
        "No FAQ found"
    }

    fn apply(&self, html: &str) -> String {
        convert_faqs(html)
    }
}
