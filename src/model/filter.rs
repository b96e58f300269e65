//! Filter definitions as served by the Mastodon REST API
//!
//! Two generations of filters exist. Version 1 filters are plain phrases that
//! the client matches itself; version 2 filters are matched server-side and
//! arrive attached to each status as [`FilterResult`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display surface a filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Home,
    Notifications,
    Public,
    Thread,
    Account,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Home,
        Kind::Notifications,
        Kind::Public,
        Kind::Thread,
        Kind::Account,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Home => "home",
            Kind::Notifications => "notifications",
            Kind::Public => "public",
            Kind::Thread => "thread",
            Kind::Account => "account",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown filter context '{}'. Use one of: home, notifications, public, thread, account",
                    s
                )
            })
    }
}

/// What to do with a status once filters have been applied.
///
/// Variants are declared in ascending severity, so the derived `Ord` is the
/// precedence used when several filters match the same status. A new tier
/// only needs to be inserted at the right position here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Action {
    /// Show normally
    #[default]
    None,
    /// Show collapsed behind a "filtered" notice
    Warn,
    /// Do not show at all
    Hide,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Warn => "warn",
            Action::Hide => "hide",
        }
    }
}

impl From<String> for Action {
    /// Servers may introduce new actions; anything unrecognised is treated as
    /// a warning so the user still gets a chance to see the status.
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "none" => Action::None,
            "hide" => Action::Hide,
            _ => Action::Warn,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version 1 filter: a phrase matched on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterV1 {
    #[serde(default)]
    pub id: String,

    pub phrase: String,

    /// Contexts this phrase is active in; all of them when omitted
    #[serde(default = "all_kinds")]
    pub context: Vec<Kind>,

    /// Only match on word boundaries
    #[serde(default)]
    pub whole_word: bool,

    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Server drops matching statuses itself; kept for completeness
    #[serde(default)]
    pub irreversible: bool,
}

impl FilterV1 {
    /// Convenience constructor for a phrase active everywhere and never expiring
    pub fn new(phrase: impl Into<String>, whole_word: bool) -> Self {
        Self {
            id: String::new(),
            phrase: phrase.into(),
            context: Kind::ALL.to_vec(),
            whole_word,
            expires_at: None,
            irreversible: false,
        }
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn in_contexts(mut self, context: &[Kind]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// A rule expires strictly before `now`; a rule without expiry never does
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }
}

fn all_kinds() -> Vec<Kind> {
    Kind::ALL.to_vec()
}

/// Version 2 filter as embedded in a [`FilterResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub context: Vec<Kind>,

    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(rename = "filter_action", default = "default_filter_action")]
    pub action: Action,
}

/// Mastodon treats a v2 filter without an explicit action as a warning
fn default_filter_action() -> Action {
    Action::Warn
}

impl Filter {
    pub fn new(title: impl Into<String>, context: &[Kind], action: Action) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            context: context.to_vec(),
            expires_at: None,
            action,
        }
    }

    pub fn applies_to(&self, kind: Kind) -> bool {
        self.context.contains(&kind)
    }
}

/// One server-side match of a v2 filter against a status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub filter: Filter,

    #[serde(default)]
    pub keyword_matches: Option<Vec<String>>,

    #[serde(default)]
    pub status_matches: Option<Vec<String>>,
}

impl FilterResult {
    pub fn keyword(filter: Filter, keyword: impl Into<String>) -> Self {
        Self {
            filter,
            keyword_matches: Some(vec![keyword.into()]),
            status_matches: None,
        }
    }
}
