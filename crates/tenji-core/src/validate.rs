//! Submission validation.
//!
//! Runs at ingestion, before a record enters the store. The classifiers
//! assume validated input (in particular `end_date >= start_date`), so
//! this is the one place those preconditions are checked. All
//! violations are collected and reported together.

use chrono::NaiveDate;
use thiserror::Error;
use url::Url;

use crate::event::Event;

/// Hosts accepted for the announcement URL.
///
/// Strict allow-list covering the platforms the record carries profile
/// links for. Subdomains of these hosts are accepted too.
pub const ANNOUNCE_DOMAIN_ALLOWLIST: &[&str] =
    &["x.com", "twitter.com", "instagram.com", "threads.net"];

const TITLE_MAX: usize = 100;
const HOST_NAME_MAX: usize = 50;
const VENUE_MAX: usize = 100;
const ADDRESS_MAX: usize = 200;
const PRICE_MAX: usize = 50;
const NOTES_MAX: usize = 500;

/// A single validation violation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field was empty or missing.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A text field exceeded its character limit.
    #[error("{field} must be {max} characters or fewer, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// The end date precedes the start date.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    /// A URL field did not parse as an http(s) URL.
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    /// The announcement URL points at a host outside the allow-list.
    #[error("announce URL host is not an allowed domain: {host}")]
    DomainNotAllowed { host: String },
}

/// Validates a submitted event, returning every violation found.
///
/// An empty result means the submission is acceptable. Limits are
/// counted in characters, not bytes, so Japanese text gets the same
/// allowance as Latin text.
#[must_use]
pub fn validate_submission(event: &Event) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_required(&mut issues, "title", &event.title);
    check_len(&mut issues, "title", &event.title, TITLE_MAX);
    check_required(&mut issues, "venue", &event.venue);
    check_len(&mut issues, "venue", &event.venue, VENUE_MAX);

    if let Some(host_name) = &event.host_name {
        check_len(&mut issues, "host_name", host_name, HOST_NAME_MAX);
    }
    if let Some(address) = &event.address {
        check_len(&mut issues, "address", address, ADDRESS_MAX);
    }
    if let Some(price) = &event.price {
        check_len(&mut issues, "price", price, PRICE_MAX);
    }
    if let Some(notes) = &event.notes {
        check_len(&mut issues, "notes", notes, NOTES_MAX);
    }

    if event.end_date < event.start_date {
        issues.push(ValidationIssue::EndBeforeStart {
            start: event.start_date,
            end: event.end_date,
        });
    }

    check_announce_url(&mut issues, &event.announce_url);

    for (field, value) in [
        ("x_url", &event.x_url),
        ("ig_url", &event.ig_url),
        ("threads_url", &event.threads_url),
    ] {
        if let Some(value) = value {
            if !value.is_empty() && parse_http_url(value).is_none() {
                issues.push(ValidationIssue::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    issues
}

fn check_required(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::Required { field });
    }
}

fn check_len(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        issues.push(ValidationIssue::TooLong { field, max, len });
    }
}

fn check_announce_url(issues: &mut Vec<ValidationIssue>, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::Required {
            field: "announce_url",
        });
        return;
    }

    let Some(url) = parse_http_url(value) else {
        issues.push(ValidationIssue::InvalidUrl {
            field: "announce_url",
            value: value.to_string(),
        });
        return;
    };

    let host = url.host_str().unwrap_or("");
    if !is_allowed_host(host) {
        issues.push(ValidationIssue::DomainNotAllowed {
            host: host.to_string(),
        });
    }
}

fn parse_http_url(value: &str) -> Option<Url> {
    let url = Url::parse(value).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }
    Some(url)
}

fn is_allowed_host(host: &str) -> bool {
    ANNOUNCE_DOMAIN_ALLOWLIST.iter().any(|domain| {
        host == *domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.'))
    })
}
