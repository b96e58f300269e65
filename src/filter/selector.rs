//! Selection among server-side version 2 filter results
//!
//! The server has already matched keywords; all that is left is to drop the
//! results whose filter does not apply to the current context and pick the
//! most severe action among the rest.

use super::traits::StatusFilter;
use crate::model::{Action, FilterResult, Kind, Status};

/// Results whose filter applies in `kind`
pub fn applicable<'a, I>(results: I, kind: Kind) -> impl Iterator<Item = &'a FilterResult>
where
    I: IntoIterator<Item = &'a FilterResult>,
{
    results
        .into_iter()
        .filter(move |result| result.filter.applies_to(kind))
}

/// Most severe action among the applicable results, [`Action::None`] if there
/// are none
pub fn select<'a, I>(results: I, kind: Kind) -> Action
where
    I: IntoIterator<Item = &'a FilterResult>,
{
    applicable(results, kind)
        .map(|result| result.filter.action)
        .max()
        .unwrap_or_default()
}

/// Stateless selector over each status's `filtered` results
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSelector;

impl ResultSelector {
    /// Titles of the applicable filters that carry the winning action, in
    /// result order without duplicates
    pub fn titles(&self, status: &Status, kind: Kind) -> Vec<String> {
        let action = select(status.filter_results(), kind);
        if action == Action::None {
            return Vec::new();
        }

        let mut titles: Vec<String> = Vec::new();
        for result in applicable(status.filter_results(), kind).filter(|r| r.filter.action == action) {
            if !titles.contains(&result.filter.title) {
                titles.push(result.filter.title.clone());
            }
        }
        titles
    }
}

impl StatusFilter for ResultSelector {
    fn evaluate(&self, status: &Status, kind: Kind) -> Action {
        select(status.filter_results(), kind)
    }

    fn name(&self) -> &'static str {
        "server"
    }
}
