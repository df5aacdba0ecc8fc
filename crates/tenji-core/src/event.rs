//! Exhibition event records as supplied by the listing store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prefecture::Prefecture;

/// A published exhibition announcement.
///
/// Records are read-only to the engine: classification and filtering
/// never mutate them. The invariant `end_date >= start_date` is
/// enforced at submission time (see [`crate::validate`]), not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier. Empty for unsaved submissions.
    #[serde(default)]
    pub id: String,
    /// Exhibition title.
    pub title: String,
    /// Organizer name, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    /// X (Twitter) profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_url: Option<String>,
    /// Instagram profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ig_url: Option<String>,
    /// Threads profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads_url: Option<String>,
    /// Venue name as entered by the submitter.
    pub venue: String,
    /// Street address, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Prefecture the venue is in.
    pub prefecture: Prefecture,
    /// Free-text admission price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// First day of the exhibition (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the exhibition (inclusive).
    pub end_date: NaiveDate,
    /// URL of the public announcement post.
    pub announce_url: String,
    /// Free-text notes shown on the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Moderation status.
    #[serde(default)]
    pub status: EventStatus,
    /// Fields the engine does not model (timestamps, future columns).
    /// Preserved verbatim across a read/write round trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Moderation status of a submitted event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Visible on the public listing.
    Published,
    /// Awaiting review. Default for new submissions.
    #[default]
    Pending,
    /// Rejected by moderation.
    Rejected,
}

impl EventStatus {
    /// String representation matching the wire form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = UnknownEventStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(Self::Published),
            "pending" => Ok(Self::Pending),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownEventStatus(s.to_string())),
        }
    }
}

/// Error type for unknown status strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown event status: {0}")]
pub struct UnknownEventStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn event_serialization_roundtrip() {
        let json = r#"{
            "id": "evt-1",
            "title": "個展「春のキャンバス」",
            "host_name": "山田花子",
            "venue": "ギャラリー青空",
            "prefecture": "東京都",
            "start_date": "2025-01-15",
            "end_date": "2025-01-28",
            "announce_url": "https://x.com/hanako_art/status/example",
            "status": "published"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "個展「春のキャンバス」");
        assert_eq!(event.prefecture, Prefecture::Tokyo);
        assert_eq!(event.start_date, date(2025, 1, 15));
        assert_eq!(event.status, EventStatus::Published);

        let reparsed: Event = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(reparsed.id, event.id);
        assert_eq!(reparsed.end_date, event.end_date);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "title": "t",
            "venue": "v",
            "prefecture": "大阪府",
            "start_date": "2025-03-01",
            "end_date": "2025-03-01",
            "announce_url": "https://x.com/a"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.id.is_empty());
        assert_eq!(event.host_name, None);
        assert_eq!(event.status, EventStatus::Pending);
    }

    #[test]
    fn unknown_fields_pass_through() {
        let json = r#"{
            "title": "t",
            "venue": "v",
            "prefecture": "京都府",
            "start_date": "2025-03-01",
            "end_date": "2025-03-02",
            "announce_url": "https://x.com/a",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.extra.get("created_at").and_then(|v| v.as_str()),
            Some("2025-01-01T00:00:00Z")
        );

        let out = serde_json::to_string(&event).unwrap();
        assert!(out.contains("created_at"), "pass-through field lost: {out}");
    }

    #[test]
    fn status_parses_known_values() {
        assert_eq!(
            "published".parse::<EventStatus>().unwrap(),
            EventStatus::Published
        );
        assert!("archived".parse::<EventStatus>().is_err());
    }
}
