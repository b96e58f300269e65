//! Evaluation seam shared by both filter generations

use crate::model::{Action, Kind, Status};

/// Decides how a status is displayed in a given context.
///
/// Implementations hold only state built at construction, so evaluating the
/// same status twice always yields the same action.
pub trait StatusFilter: Send + Sync {
    /// Action for `status` when shown in `kind`
    fn evaluate(&self, status: &Status, kind: Kind) -> Action;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}
