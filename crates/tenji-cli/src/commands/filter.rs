//! Filter command: JSONL events in, filtered JSONL out.
//!
//! The input is expected pre-sorted by start date ascending (the store's
//! listing order); output preserves it. Malformed lines are skipped with
//! a warning rather than aborting the run.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tenji_core::{Event, FilterQuery, VenueClassifier, VenueType, apply_filters};

use super::util::read_input;
use crate::config::Config;

/// An event record with its computed classification badge attached.
#[derive(Debug, Serialize)]
struct BadgedEvent<'a> {
    #[serde(flatten)]
    event: &'a Event,
    venue_type: VenueType,
}

/// Runs the filter command, writing matching records as JSONL to stdout.
pub fn run(
    config: &Config,
    input: &str,
    range: Option<&str>,
    prefecture: Option<&str>,
    venue_type: Option<&str>,
    today: Option<NaiveDate>,
    badges: bool,
) -> Result<()> {
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let tables = config.venue_tables();
    let classifier = VenueClassifier::new(&tables);

    // The configured default stands in for an absent range flag; the
    // explicit `all` sentinel still disables the axis.
    let default_range = config.default_range_token();
    let query = FilterQuery::from_request(
        Some(range.unwrap_or(default_range.as_str())),
        prefecture,
        venue_type,
    );

    let events = parse_events(&read_input(input)?);
    let total = events.len();
    let filtered = apply_filters(events, &query, today, &classifier);

    for event in &filtered {
        let json = if badges {
            serde_json::to_string(&BadgedEvent {
                event,
                venue_type: classifier.classify(
                    &event.venue,
                    Some(&event.title),
                    event.host_name.as_deref(),
                ),
            })?
        } else {
            serde_json::to_string(event)?
        };
        println!("{json}");
    }

    eprintln!("{} of {total} events matched", filtered.len());
    Ok(())
}

/// Parses JSONL records, skipping malformed lines with a warning.
fn parse_events(input: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(line) {
            Ok(event) => events.push(event),
            Err(error) => {
                tracing::warn!(line = index + 1, %error, "skipping malformed event record");
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_skips_malformed_lines() {
        let input = concat!(
            r#"{"title":"t","venue":"v","prefecture":"東京都","start_date":"2025-09-01","end_date":"2025-09-14","announce_url":"https://x.com/a"}"#,
            "\n",
            "not valid json\n",
            "\n",
            r#"{"title":"u","venue":"w","prefecture":"大阪府","start_date":"2025-09-20","end_date":"2025-09-25","announce_url":"https://x.com/b"}"#,
            "\n",
        );

        let events = parse_events(input);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "t");
        assert_eq!(events[1].title, "u");
    }

    #[test]
    fn parse_events_empty_input() {
        assert!(parse_events("").is_empty());
    }
}
