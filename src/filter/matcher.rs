//! Client-side matching of version 1 phrase filters

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::pattern::{self, CompiledPattern};
use super::traits::StatusFilter;
use crate::model::{Action, FilterV1, Kind, Status};
use crate::text::{MastodonHtml, PlainText};

/// Match a status against a compiled pattern. Only [`Action::None`] or
/// [`Action::Hide`] can come out of phrase filters.
///
/// Poll options are checked first, each on its own. The body (as plain
/// text), the content warning and the joined media descriptions are then
/// checked together; empty content warnings and missing descriptions are
/// skipped.
pub fn match_status(pattern: Option<&CompiledPattern>, status: &Status, converter: &dyn PlainText) -> Action {
    let Some(pattern) = pattern else {
        return Action::None;
    };

    let actionable = status.actionable();

    if let Some(poll) = &actionable.poll {
        if poll.options.iter().any(|option| pattern.is_match(&option.title)) {
            trace!("Status {} hidden by poll option", status.id);
            return Action::Hide;
        }
    }

    let spoiler_text = &actionable.spoiler_text;
    let descriptions = actionable.attachment_descriptions();

    if pattern.is_match(&converter.to_plain_text(&actionable.content))
        || (!spoiler_text.is_empty() && pattern.is_match(spoiler_text))
        || (!descriptions.is_empty() && pattern.is_match(&descriptions.join("\n")))
    {
        trace!("Status {} hidden by phrase filter", status.id);
        Action::Hide
    } else {
        Action::None
    }
}

/// Phrase filters compiled per context
#[derive(Clone)]
pub struct PhraseMatcher {
    patterns: Vec<(Kind, CompiledPattern)>,
    converter: Arc<dyn PlainText>,
}

impl PhraseMatcher {
    /// Compile `rules` with the default Mastodon HTML converter
    pub fn new(rules: &[FilterV1], now: DateTime<Utc>) -> Result<Self> {
        Self::with_converter(rules, now, Arc::new(MastodonHtml))
    }

    pub fn with_converter(
        rules: &[FilterV1],
        now: DateTime<Utc>,
        converter: Arc<dyn PlainText>,
    ) -> Result<Self> {
        Ok(Self {
            patterns: pattern::compile_per_kind(rules, now)?,
            converter,
        })
    }

    /// The pattern used in `kind`, if any rule is live there
    pub fn pattern(&self, kind: Kind) -> Option<&CompiledPattern> {
        self.patterns
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, pattern)| pattern)
    }

    /// True when no context has a live rule
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl StatusFilter for PhraseMatcher {
    fn evaluate(&self, status: &Status, kind: Kind) -> Action {
        match_status(self.pattern(kind), status, self.converter.as_ref())
    }

    fn name(&self) -> &'static str {
        "phrase"
    }
}

impl fmt::Debug for PhraseMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseMatcher")
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl PlainText for Upper {
        fn to_plain_text(&self, html: &str) -> String {
            html.to_uppercase()
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_absent_pattern_is_none() {
        let status = Status::new("1", "anything").with_poll(["anything"]);
        assert_eq!(match_status(None, &status, &MastodonHtml), Action::None);
    }

    #[test]
    fn test_matches_through_html() {
        let pattern = pattern::compile(&[FilterV1::new("hello world", false)], now())
            .unwrap()
            .unwrap();
        let status = Status::new("1", "<p>Hello <span>world</span></p>");

        assert_eq!(match_status(Some(&pattern), &status, &MastodonHtml), Action::Hide);
    }

    #[test]
    fn test_custom_converter_is_used() {
        let rules = [FilterV1::new("ß", false)];
        let matcher = PhraseMatcher::with_converter(&rules, now(), Arc::new(Upper)).unwrap();

        // "ß".to_uppercase() is "SS", which no longer contains the phrase
        let status = Status::new("1", "straße");
        assert_eq!(matcher.evaluate(&status, Kind::Home), Action::None);
    }

    #[test]
    fn test_media_descriptions_joined() {
        let pattern = pattern::compile(&[FilterV1::new("first\nsecond", false)], now())
            .unwrap()
            .unwrap();
        let status = Status::new("1", "")
            .with_attachment(Some("first"))
            .with_attachment(None)
            .with_attachment(Some("second"));

        assert_eq!(match_status(Some(&pattern), &status, &MastodonHtml), Action::Hide);
    }

    #[test]
    fn test_context_restricts_rules() {
        let rules = [FilterV1::new("spoiler", false).in_contexts(&[Kind::Home, Kind::Public])];
        let matcher = PhraseMatcher::new(&rules, now()).unwrap();
        let status = Status::new("1", "no spoiler please");

        assert_eq!(matcher.evaluate(&status, Kind::Home), Action::Hide);
        assert_eq!(matcher.evaluate(&status, Kind::Public), Action::Hide);
        assert_eq!(matcher.evaluate(&status, Kind::Thread), Action::None);
        assert!(matcher.pattern(Kind::Notifications).is_none());
        assert!(!matcher.is_empty());
    }
}
