//! Data model for statuses and filters
//!
//! Field names follow the Mastodon REST API so JSON can be decoded directly.

pub mod filter;
pub mod status;

pub use filter::{Action, Filter, FilterResult, FilterV1, Kind};
pub use status::{Attachment, Poll, PollOption, Status};
