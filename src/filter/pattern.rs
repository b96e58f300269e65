//! Phrase compilation for version 1 filters
//!
//! Every live phrase becomes one token of a single case-insensitive
//! alternation, so a status field is scanned once no matter how many phrases
//! the user has. Only match/no-match is used, so token order is irrelevant.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::model::{FilterV1, Kind};

/// Word characters for whole-word matching. ASCII only: phrases in other
/// scripts (accented Latin, CJK, ...) are never whole-word eligible and fall
/// back to substring matching.
const WORD_CHARS: &str = "0-9A-Za-z_";

lazy_static! {
    static ref WORD_ONLY: Regex =
        Regex::new(&format!("^[{}]+$", WORD_CHARS)).expect("Failed to compile word regex");
    // Case folding would otherwise pull KELVIN SIGN and LONG S into the class
    static ref LEADING_BOUNDARY: String = format!("(?:^|(?-i:[^{}]))", WORD_CHARS);
    static ref TRAILING_BOUNDARY: String = format!("(?:$|(?-i:[^{}]))", WORD_CHARS);
}

/// Combined pattern for a set of phrase filters
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    rule_count: usize,
}

impl CompiledPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of phrases folded into the pattern
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// True when the phrase is one or more word characters and nothing else
pub fn is_whole_word_eligible(phrase: &str) -> bool {
    WORD_ONLY.is_match(phrase)
}

/// Regex source for a single phrase.
///
/// The phrase is always escaped. Boundary assertions are added only when
/// whole-word matching is requested and the phrase is made of word characters;
/// a phrase like "can't" silently degrades to a substring match.
pub fn rule_token(rule: &FilterV1) -> String {
    let quoted = regex::escape(&rule.phrase);
    if rule.whole_word && is_whole_word_eligible(&rule.phrase) {
        format!("{}{}{}", *LEADING_BOUNDARY, quoted, *TRAILING_BOUNDARY)
    } else {
        quoted
    }
}

/// Alternation source for the rules that are live at `now`, with the number of
/// rules it holds. `None` when nothing is left to match.
fn pattern_source<'a, I>(rules: I, now: DateTime<Utc>) -> Option<(String, usize)>
where
    I: IntoIterator<Item = &'a FilterV1>,
{
    let mut tokens = Vec::new();
    let mut expired = 0usize;

    for rule in rules {
        if rule.is_expired(now) {
            expired += 1;
            continue;
        }
        // An empty token would match every status
        if rule.phrase.is_empty() {
            warn!("Skipping filter {:?} with an empty phrase", rule.id);
            continue;
        }
        tokens.push(rule_token(rule));
    }

    if expired > 0 {
        debug!("Skipped {} expired phrase filter(s)", expired);
    }

    if tokens.is_empty() {
        return None;
    }

    let count = tokens.len();
    Some((tokens.join("|"), count))
}

fn build(source: &str, rule_count: usize) -> Result<CompiledPattern> {
    let regex = RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Failed to compile pattern for {} phrase filter(s)", rule_count))?;

    Ok(CompiledPattern { regex, rule_count })
}

/// Compile every non-expired rule into one pattern.
///
/// Returns `Ok(None)` when the list is empty or fully expired. Expiry is judged
/// once, here; callers rebuild to pick up newly expired rules.
pub fn compile(rules: &[FilterV1], now: DateTime<Utc>) -> Result<Option<CompiledPattern>> {
    match pattern_source(rules, now) {
        Some((source, count)) => {
            debug!("Compiled {} phrase filter(s)", count);
            build(&source, count).map(Some)
        }
        None => Ok(None),
    }
}

/// Like [`compile`], restricted to the rules active in `kind`
pub fn compile_for_kind(
    rules: &[FilterV1],
    kind: Kind,
    now: DateTime<Utc>,
) -> Result<Option<CompiledPattern>> {
    let applicable: Vec<FilterV1> = rules
        .iter()
        .filter(|rule| rule.context.contains(&kind))
        .cloned()
        .collect();
    compile(&applicable, now)
}

/// One pattern per context. Contexts sharing the same live rules share one
/// compiled regex; contexts with no live rules are absent.
pub fn compile_per_kind(
    rules: &[FilterV1],
    now: DateTime<Utc>,
) -> Result<Vec<(Kind, CompiledPattern)>> {
    let mut compiled: Vec<(Kind, CompiledPattern)> = Vec::new();

    for kind in Kind::ALL {
        let applicable = rules.iter().filter(|rule| rule.context.contains(&kind));
        let Some((source, count)) = pattern_source(applicable, now) else {
            continue;
        };

        let pattern = match compiled.iter().find(|(_, p)| p.as_str() == source) {
            Some((_, existing)) => existing.clone(),
            None => build(&source, count)?,
        };
        compiled.push((kind, pattern));
    }

    debug!("Compiled phrase filters for {} context(s)", compiled.len());
    Ok(compiled)
}
