//! Filter orchestration over candidate event lists.
//!
//! Applies the temporal and venue classifiers as independent predicate
//! passes over a pre-sorted candidate list. Filtering is stable: the
//! output is always a subsequence of the input in the original order,
//! and re-applying the same query is a no-op.

use chrono::NaiveDate;

use crate::prefecture::Prefecture;
use crate::range::{RangeToken, TemporalClassifier};
use crate::venue::{VenueClassifier, VenueType};

/// An event suitable for filtering.
///
/// This trait lets the orchestrator work with different event
/// representations (the wire [`crate::Event`], storage rows, or test
/// fixtures).
pub trait FilterableEvent {
    /// First day of the event (inclusive).
    fn start_date(&self) -> NaiveDate;

    /// Last day of the event (inclusive).
    fn end_date(&self) -> NaiveDate;

    /// Prefecture the venue is in.
    fn prefecture(&self) -> Prefecture;

    /// Venue name as entered.
    fn venue(&self) -> &str;

    /// Exhibition title.
    fn title(&self) -> &str;

    /// Organizer name, if any.
    fn host_name(&self) -> Option<&str>;
}

impl FilterableEvent for crate::Event {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    fn prefecture(&self) -> Prefecture {
        self.prefecture
    }

    fn venue(&self) -> &str {
        &self.venue
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }
}

/// A fully-typed filter request.
///
/// `None` on an axis means "no filter on this axis". Raw request tokens
/// go through [`FilterQuery::from_request`], which owns the lenient
/// string mapping; typed callers construct this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterQuery {
    /// Temporal filter. `None` only for an explicit "all time" request.
    pub range: Option<RangeToken>,
    /// Exact prefecture match.
    pub prefecture: Option<Prefecture>,
    /// Venue classification filter.
    pub venue_type: Option<VenueType>,
}

impl Default for FilterQuery {
    /// The default listing request: upcoming events, all prefectures,
    /// all venue types. Note that the default is *not* unfiltered —
    /// expired listings only surface on an explicit "all" request.
    fn default() -> Self {
        Self {
            range: Some(RangeToken::Upcoming),
            prefecture: None,
            venue_type: None,
        }
    }
}

impl FilterQuery {
    /// The sentinel meaning "no filter on this axis".
    pub const ALL: &'static str = "all";

    /// Maps raw request tokens to a typed query.
    ///
    /// An absent or unrecognized range token falls back to `upcoming`;
    /// the explicit `all` sentinel disables the axis. Unrecognized
    /// prefecture or venue-type tokens are treated as absent. Malformed
    /// parameters therefore never abort a request.
    #[must_use]
    pub fn from_request(
        range: Option<&str>,
        prefecture: Option<&str>,
        venue_type: Option<&str>,
    ) -> Self {
        let range = match range {
            Some(Self::ALL) => None,
            Some(token) => Some(token.parse().unwrap_or(RangeToken::Upcoming)),
            None => Some(RangeToken::Upcoming),
        };
        let prefecture = prefecture
            .filter(|token| *token != Self::ALL)
            .and_then(|token| token.parse().ok());
        let venue_type = venue_type
            .filter(|token| *token != Self::ALL)
            .and_then(|token| token.parse().ok());

        Self {
            range,
            prefecture,
            venue_type,
        }
    }
}

/// Applies a filter query to a candidate list, preserving input order.
///
/// The input is expected pre-sorted by start date ascending; no
/// re-sorting happens here. The three passes run in a fixed order
/// (range, prefecture, venue type). Temporal boundaries are computed
/// once from `today` and reused across all candidates.
pub fn apply_filters<E: FilterableEvent>(
    mut events: Vec<E>,
    query: &FilterQuery,
    today: NaiveDate,
    venues: &VenueClassifier,
) -> Vec<E> {
    let candidates = events.len();

    if let Some(token) = query.range {
        let temporal = TemporalClassifier::new(today);
        events.retain(|e| temporal.matches(token, e.start_date(), e.end_date()));
    }

    if let Some(prefecture) = query.prefecture {
        events.retain(|e| e.prefecture() == prefecture);
    }

    if let Some(venue_type) = query.venue_type {
        events.retain(|e| {
            venues.classify(e.venue(), Some(e.title()), e.host_name()) == venue_type
        });
    }

    tracing::debug!(
        candidates,
        kept = events.len(),
        range = query.range.map(|t| t.as_str()),
        prefecture = query.prefecture.map(|p| p.as_str()),
        venue_type = query.venue_type.map(|v| v.as_str()),
        "applied filters"
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test event implementation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestEvent {
        id: &'static str,
        start: NaiveDate,
        end: NaiveDate,
        prefecture: Prefecture,
        venue: &'static str,
        title: &'static str,
        host: Option<&'static str>,
    }

    impl TestEvent {
        fn new(id: &'static str, start: NaiveDate, end: NaiveDate) -> Self {
            Self {
                id,
                start,
                end,
                prefecture: Prefecture::Tokyo,
                venue: "ギャラリー青空",
                title: "個展",
                host: None,
            }
        }

        fn in_prefecture(mut self, prefecture: Prefecture) -> Self {
            self.prefecture = prefecture;
            self
        }

        fn at_venue(mut self, venue: &'static str) -> Self {
            self.venue = venue;
            self
        }
    }

    impl FilterableEvent for TestEvent {
        fn start_date(&self) -> NaiveDate {
            self.start
        }

        fn end_date(&self) -> NaiveDate {
            self.end
        }

        fn prefecture(&self) -> Prefecture {
            self.prefecture
        }

        fn venue(&self) -> &str {
            self.venue
        }

        fn title(&self) -> &str {
            self.title
        }

        fn host_name(&self) -> Option<&str> {
            self.host
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn today() -> NaiveDate {
        date(2025, 9, 10)
    }

    fn ids(events: &[TestEvent]) -> Vec<&'static str> {
        events.iter().map(|e| e.id).collect()
    }

    fn sample() -> Vec<TestEvent> {
        vec![
            // Ended before today.
            TestEvent::new("finished", date(2025, 8, 1), date(2025, 9, 5)),
            // In progress.
            TestEvent::new("running", date(2025, 9, 1), date(2025, 9, 14)),
            // Starts in ten days, in Kanagawa.
            TestEvent::new("soon", date(2025, 9, 20), date(2025, 9, 25))
                .in_prefecture(Prefecture::Kanagawa),
            // Far future, at a corporate gallery.
            TestEvent::new("far", date(2025, 12, 1), date(2025, 12, 10))
                .at_venue("ニコンサロン"),
        ]
    }

    #[test]
    fn default_query_keeps_only_unfinished() {
        let result = apply_filters(
            sample(),
            &FilterQuery::default(),
            today(),
            &VenueClassifier::builtin(),
        );
        assert_eq!(ids(&result), vec!["running", "soon", "far"]);
    }

    #[test]
    fn no_range_filter_keeps_everything() {
        let query = FilterQuery {
            range: None,
            prefecture: None,
            venue_type: None,
        };
        let result = apply_filters(sample(), &query, today(), &VenueClassifier::builtin());
        assert_eq!(ids(&result), vec!["finished", "running", "soon", "far"]);
    }

    #[test]
    fn prefecture_filter_is_exact() {
        let query = FilterQuery {
            range: None,
            prefecture: Some(Prefecture::Kanagawa),
            venue_type: None,
        };
        let result = apply_filters(sample(), &query, today(), &VenueClassifier::builtin());
        assert_eq!(ids(&result), vec!["soon"]);
    }

    #[test]
    fn venue_type_filter_splits_major_and_independent() {
        let classifier = VenueClassifier::builtin();
        let major = FilterQuery {
            range: None,
            prefecture: None,
            venue_type: Some(VenueType::Major),
        };
        let result = apply_filters(sample(), &major, today(), &classifier);
        assert_eq!(ids(&result), vec!["far"]);

        let independent = FilterQuery {
            range: None,
            prefecture: None,
            venue_type: Some(VenueType::Independent),
        };
        let result = apply_filters(sample(), &independent, today(), &classifier);
        assert_eq!(ids(&result), vec!["finished", "running", "soon"]);
    }

    #[test]
    fn passes_compose() {
        let query = FilterQuery {
            range: Some(RangeToken::Next30),
            prefecture: Some(Prefecture::Kanagawa),
            venue_type: Some(VenueType::Independent),
        };
        let result = apply_filters(sample(), &query, today(), &VenueClassifier::builtin());
        assert_eq!(ids(&result), vec!["soon"]);
    }

    #[test]
    fn output_preserves_input_order() {
        // Input deliberately not sorted by start date; order must be
        // kept as-is, not repaired.
        let events = vec![
            TestEvent::new("b", date(2025, 9, 20), date(2025, 9, 25)),
            TestEvent::new("a", date(2025, 9, 1), date(2025, 9, 14)),
            TestEvent::new("c", date(2025, 10, 1), date(2025, 10, 2)),
        ];
        let result = apply_filters(
            events,
            &FilterQuery::default(),
            today(),
            &VenueClassifier::builtin(),
        );
        assert_eq!(ids(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let query = FilterQuery::default();
        let classifier = VenueClassifier::builtin();
        let once = apply_filters(sample(), &query, today(), &classifier);
        let twice = apply_filters(once.clone(), &query, today(), &classifier);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        let result = apply_filters(
            Vec::<TestEvent>::new(),
            &FilterQuery::default(),
            today(),
            &VenueClassifier::builtin(),
        );
        assert!(result.is_empty());
    }

    // ========== from_request tests ==========

    #[test]
    fn absent_range_defaults_to_upcoming() {
        let query = FilterQuery::from_request(None, None, None);
        assert_eq!(query, FilterQuery::default());
    }

    #[test]
    fn all_sentinel_disables_each_axis() {
        let query = FilterQuery::from_request(Some("all"), Some("all"), Some("all"));
        assert_eq!(query.range, None);
        assert_eq!(query.prefecture, None);
        assert_eq!(query.venue_type, None);
    }

    #[test]
    fn unrecognized_range_falls_back_to_default() {
        let query = FilterQuery::from_request(Some("lastYear"), None, None);
        assert_eq!(query.range, Some(RangeToken::Upcoming));
    }

    #[test]
    fn unrecognized_secondary_tokens_are_absent() {
        let query = FilterQuery::from_request(None, Some("東京"), Some("corporate"));
        assert_eq!(query.prefecture, None);
        assert_eq!(query.venue_type, None);
    }

    #[test]
    fn recognized_tokens_map_through() {
        let query = FilterQuery::from_request(Some("next30"), Some("東京都"), Some("major"));
        assert_eq!(query.range, Some(RangeToken::Next30));
        assert_eq!(query.prefecture, Some(Prefecture::Tokyo));
        assert_eq!(query.venue_type, Some(VenueType::Major));
    }
}
