//! Rich text to plain text conversion
//!
//! Status bodies arrive as HTML. Phrase filters are written against what the
//! reader sees, so the body is flattened to plain text before matching.

mod html;

pub use html::MastodonHtml;

/// Converts HTML-bearing text into plain text suitable for phrase matching.
///
/// Implementations must keep every human-visible character. Markup may be
/// dropped or turned into whitespace.
pub trait PlainText: Send + Sync {
    fn to_plain_text(&self, html: &str) -> String;
}

/// Trim trailing whitespace; everything before the last visible character is kept
pub fn trim_trailing_whitespace(text: &str) -> &str {
    text.trim_end()
}

/// Wrap text in Unicode first-strong and pop directional isolates (U+2068 and U+2069)
///
/// Keeps right-to-left user content from reordering the text around it.
pub fn unicode_wrap(text: &str) -> String {
    format!("\u{2068}{}\u{2069}", text)
}
