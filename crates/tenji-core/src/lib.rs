//! Core engine for the exhibition listing board.
//!
//! This crate contains the fundamental types and logic for:
//! - Temporal classification: which named date ranges an event falls in
//! - Venue classification: major corporate exhibition vs. independent show
//! - Filter orchestration: applying both as predicates over a listing
//! - Submission validation and calendar link generation at the edges
//!
//! Everything here is pure and synchronous. The only state is the
//! immutable alias tables built at startup, so all entry points are safe
//! to call concurrently without coordination.

pub mod calendar;
pub mod event;
pub mod filter;
pub mod prefecture;
pub mod range;
pub mod validate;
pub mod venue;

pub use calendar::google_calendar_url;
pub use event::{Event, EventStatus};
pub use filter::{FilterQuery, FilterableEvent, apply_filters};
pub use prefecture::{Prefecture, UnknownPrefecture};
pub use range::{RangeToken, TemporalClassifier, UnknownRangeToken};
pub use validate::{ANNOUNCE_DOMAIN_ALLOWLIST, ValidationIssue, validate_submission};
pub use venue::{AliasCluster, VenueClassifier, VenueTables, VenueType, normalize};
