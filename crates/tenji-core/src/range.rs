//! Date-range classification for exhibition events.
//!
//! An event occupies the inclusive calendar interval `[start, end]` and
//! is tested against named ranges anchored at "today". Buckets overlap:
//! an event can be `upcoming` and `thisMonth` at the same time, so
//! [`TemporalClassifier::classify`] returns a set, not a single token.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named date range anchored at the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeToken {
    /// Not yet finished (`end >= today`). Includes events in progress.
    Upcoming,
    /// In progress today (`start <= today <= end`).
    Ongoing,
    /// Overlaps the Sunday-start week containing today and has not ended.
    ThisWeek,
    /// Overlaps the calendar month containing today and has not ended.
    ThisMonth,
    /// Starts within the next 30 days, today inclusive. An event already
    /// underway does not qualify.
    Next30,
}

impl RangeToken {
    /// All tokens, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Upcoming,
        Self::Ongoing,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::Next30,
    ];

    /// The wire form used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
            Self::Next30 => "next30",
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RangeToken {
    type Err = UnknownRangeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "thisWeek" => Ok(Self::ThisWeek),
            "thisMonth" => Ok(Self::ThisMonth),
            "next30" => Ok(Self::Next30),
            _ => Err(UnknownRangeToken(s.to_string())),
        }
    }
}

/// Error type for unknown range token strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown range token: {0}")]
pub struct UnknownRangeToken(pub String);

/// Evaluates range membership for a fixed evaluation date.
///
/// Week, month, and 30-day boundaries depend only on "today", so they
/// are computed once at construction and reused across every candidate
/// event. All comparisons are on calendar dates with inclusive bounds;
/// there is no time-of-day or timezone handling — the caller supplies a
/// consistent local calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalClassifier {
    today: NaiveDate,
    week_start: NaiveDate,
    week_end: NaiveDate,
    month_start: NaiveDate,
    month_end: NaiveDate,
    horizon: NaiveDate,
}

impl TemporalClassifier {
    /// Builds a classifier anchored at `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let week = today.week(Weekday::Sun);
        let month_start = today.with_day(1).unwrap_or(today);
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(today);
        let horizon = today.checked_add_days(Days::new(30)).unwrap_or(today);

        Self {
            today,
            week_start: week.first_day(),
            week_end: week.last_day(),
            month_start,
            month_end,
            horizon,
        }
    }

    /// The evaluation date this classifier is anchored at.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whether `[start, end]` falls into the given range.
    #[must_use]
    pub fn matches(&self, token: RangeToken, start: NaiveDate, end: NaiveDate) -> bool {
        match token {
            RangeToken::Upcoming => end >= self.today,
            RangeToken::Ongoing => start <= self.today && self.today <= end,
            // Overlap with the fixed period alone is not enough: a run
            // that ended before today must not resurface here.
            RangeToken::ThisWeek => {
                start <= self.week_end && end >= self.week_start && end >= self.today
            }
            RangeToken::ThisMonth => {
                start <= self.month_end && end >= self.month_start && end >= self.today
            }
            RangeToken::Next30 => self.today <= start && start <= self.horizon,
        }
    }

    /// Every range `[start, end]` belongs to, in [`RangeToken::ALL`] order.
    ///
    /// May be empty (a finished event) or contain several tokens; the
    /// ranges are not a partition.
    #[must_use]
    pub fn classify(&self, start: NaiveDate, end: NaiveDate) -> Vec<RangeToken> {
        RangeToken::ALL
            .iter()
            .copied()
            .filter(|token| self.matches(*token, start, end))
            .collect()
    }
}
