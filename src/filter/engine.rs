//! Filter engine: one of the two filter generations, fixed at construction

use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::matcher::PhraseMatcher;
use super::selector::ResultSelector;
use super::traits::StatusFilter;
use crate::model::{Action, FilterV1, Kind, Status};
use crate::text::PlainText;

/// Which filter generation an engine was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Version 1 phrases matched on the client
    Legacy,
    /// Version 2 results matched on the server
    Modern,
}

/// Decision for one status, with the filters behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub action: Action,
    /// Titles of the server-side filters carrying `action`; always empty for
    /// phrase filters
    pub filter_titles: Vec<String>,
}

/// Immutable filter state for one filter list.
///
/// Build a new engine whenever the filter list changes (or periodically, so
/// expired phrases drop out); see [`super::EngineHandle`] for swapping it
/// under concurrent readers.
#[derive(Debug, Clone)]
pub enum FilterEngine {
    Legacy(PhraseMatcher),
    Modern(ResultSelector),
}

impl FilterEngine {
    /// Engine for version 1 phrase filters, judged live at `now`
    pub fn legacy(rules: &[FilterV1], now: DateTime<Utc>) -> Result<Self> {
        let matcher = PhraseMatcher::new(rules, now)?;
        info!("Initialized phrase filtering with {} rule(s)", rules.len());
        Ok(FilterEngine::Legacy(matcher))
    }

    /// Engine for version 1 phrase filters with a caller-supplied HTML converter
    pub fn legacy_with_converter(
        rules: &[FilterV1],
        now: DateTime<Utc>,
        converter: Arc<dyn PlainText>,
    ) -> Result<Self> {
        let matcher = PhraseMatcher::with_converter(rules, now, converter)?;
        info!("Initialized phrase filtering with {} rule(s)", rules.len());
        Ok(FilterEngine::Legacy(matcher))
    }

    /// Engine for version 2 server-side filters
    pub fn modern() -> Self {
        info!("Initialized server-side filtering");
        FilterEngine::Modern(ResultSelector)
    }

    pub fn mode(&self) -> Mode {
        match self {
            FilterEngine::Legacy(_) => Mode::Legacy,
            FilterEngine::Modern(_) => Mode::Modern,
        }
    }

    fn inner(&self) -> &dyn StatusFilter {
        match self {
            FilterEngine::Legacy(matcher) => matcher,
            FilterEngine::Modern(selector) => selector,
        }
    }

    /// Action for `status` shown in `kind`
    pub fn evaluate(&self, status: &Status, kind: Kind) -> Action {
        let action = self.inner().evaluate(status, kind);
        debug!(
            filter = self.inner().name(),
            status = %status.id,
            %kind,
            %action,
            "Evaluated status"
        );
        action
    }

    /// Action plus the titles of the filters that produced it
    pub fn explain(&self, status: &Status, kind: Kind) -> Verdict {
        let action = self.evaluate(status, kind);
        let filter_titles = match self {
            FilterEngine::Legacy(_) => Vec::new(),
            FilterEngine::Modern(selector) => selector.titles(status, kind),
        };
        Verdict { action, filter_titles }
    }

    /// Evaluate a batch in parallel; results keep the input order
    pub fn evaluate_all(&self, statuses: &[Status], kind: Kind) -> Vec<Verdict> {
        statuses
            .par_iter()
            .map(|status| self.explain(status, kind))
            .collect()
    }
}

impl StatusFilter for FilterEngine {
    fn evaluate(&self, status: &Status, kind: Kind) -> Action {
        FilterEngine::evaluate(self, status, kind)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
