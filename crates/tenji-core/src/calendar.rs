//! Google Calendar link generation for listed events.

use chrono::Days;

use crate::event::Event;

/// Builds a Google Calendar "add event" URL for an exhibition.
///
/// The entry is an all-day span; Google treats the second date as
/// exclusive, so the event's inclusive end date is advanced by one day.
/// The details block carries venue, organizer, price, and notes, ending
/// with the announcement URL. Location prefers the street address and
/// falls back to the venue name.
#[must_use]
pub fn google_calendar_url(event: &Event) -> String {
    let start = event.start_date.format("%Y%m%d").to_string();
    let end_exclusive = event
        .end_date
        .checked_add_days(Days::new(1))
        .unwrap_or(event.end_date)
        .format("%Y%m%d")
        .to_string();

    let mut details = String::new();
    if !event.venue.is_empty() {
        details.push_str(&format!("会場: {}\n", event.venue));
    }
    if let Some(host_name) = &event.host_name {
        details.push_str(&format!("主催: {host_name}\n"));
    }
    if let Some(price) = &event.price {
        details.push_str(&format!("料金: {price}\n"));
    }
    if let Some(notes) = &event.notes {
        details.push_str(&format!("\n{notes}\n"));
    }
    details.push_str(&format!("\n詳細情報: {}", event.announce_url));

    let location = event.address.as_deref().unwrap_or(&event.venue);

    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}%2F{}&details={}&location={}",
        urlencoding::encode(&event.title),
        start,
        end_exclusive,
        urlencoding::encode(&details),
        urlencoding::encode(location),
    )
}
