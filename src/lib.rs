//! # postfilter - content filters for Mastodon timelines
//!
//! Decides, for each status a client is about to display, whether it is shown
//! normally, shown behind a warning, or hidden.
//!
//! ## Features
//!
//! - **Phrase filters** (API v1): keywords compiled into one case-insensitive
//!   regex per display context, with optional whole-word matching and expiry
//! - **Server filters** (API v2): picks the most severe action among the
//!   results the server attached to a status for the current context
//! - **Rich text aware**: status HTML is flattened before phrase matching
//! - **Concurrent**: engines are immutable and can be swapped under readers
//!
//! ## Quick Start
//!
//! ```bash
//! # Phrase filters against a saved timeline
//! postfilter check --statuses home.json --v1-filters filters.json --context home
//!
//! # Server-side results already embedded in each status
//! postfilter check --statuses notifications.json --context notifications --format json
//! ```

pub mod cli;
pub mod config;
pub mod filter;
pub mod model;
pub mod shared;
pub mod text;

pub use cli::{Cli, Output};
pub use config::PostfilterConfig;
pub use filter::{EngineHandle, FilterEngine, StatusFilter, Verdict};
pub use model::{Action, Kind, Status};

/// Result type alias for postfilter operations
pub type Result<T> = anyhow::Result<T>;

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Package description
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
