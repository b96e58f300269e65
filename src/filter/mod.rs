//! Status filtering
//!
//! Two filter generations are supported, chosen when the engine is built:
//!
//! - **Legacy** (API v1): the user's phrases are compiled into one
//!   case-insensitive regex per context and matched against the poll options,
//!   body, content warning and media descriptions of each status. The outcome
//!   is either show or hide.
//! - **Modern** (API v2): the server has already matched keywords and attached
//!   the results to each status; the engine keeps those whose filter applies
//!   to the current context and picks the most severe action.
//!
//! The display context is passed on every call rather than stored, so one
//! engine serves every timeline at once.

pub mod engine;
pub mod handle;
pub mod matcher;
pub mod pattern;
pub mod selector;
pub mod traits;


pub use engine::{FilterEngine, Mode, Verdict};
pub use handle::EngineHandle;
pub use matcher::PhraseMatcher;
pub use pattern::CompiledPattern;
pub use selector::ResultSelector;
pub use traits::StatusFilter;
