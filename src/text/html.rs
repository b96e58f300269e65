use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{PlainText, trim_trailing_whitespace};

lazy_static! {
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Failed to compile whitespace regex");
    static ref LINE_BREAK: Regex =
        Regex::new(r"(?i)<br\s*/?>").expect("Failed to compile line break regex");
    static ref PARAGRAPH_BREAK: Regex =
        Regex::new(r"(?i)</p>\s*<p(?:\s[^>]*)?>").expect("Failed to compile paragraph regex");
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("Failed to compile tag regex");
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z]+);")
        .expect("Failed to compile entity regex");
}

/// Converter for the restricted HTML subset Mastodon emits
/// (`p`, `br`, `a`, `span` and a few inline formatting tags).
///
/// Source whitespace collapses the way a renderer would, `<br>` becomes a
/// newline, paragraph boundaries become a blank line, remaining tags are
/// dropped and character references are decoded. `&nbsp;` decodes to a plain
/// space so phrases typed with ordinary spaces still match.
#[derive(Debug, Clone, Copy, Default)]
pub struct MastodonHtml;

impl PlainText for MastodonHtml {
    fn to_plain_text(&self, html: &str) -> String {
        let text = WHITESPACE_RUN.replace_all(html, " ");
        let text = LINE_BREAK.replace_all(&text, "\n");
        let text = PARAGRAPH_BREAK.replace_all(&text, "\n\n");
        let text = TAG.replace_all(&text, "");
        let text = ENTITY.replace_all(&text, |caps: &Captures| decode_entity(caps));

        trim_trailing_whitespace(&text).to_string()
    }
}

fn decode_entity(caps: &Captures) -> String {
    let name = &caps[1];

    let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => None,
        }
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}
