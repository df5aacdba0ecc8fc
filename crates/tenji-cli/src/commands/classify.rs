//! Classification inspector for a single venue or exhibition.
//!
//! Shows the normalized text alongside both predicate results, which is
//! the quickest way to check why a listing got (or missed) its badge.

use anyhow::{Context, Result};
use serde::Serialize;
use tenji_core::{VenueClassifier, VenueType, normalize};

use crate::config::Config;

/// Full classification result for one input.
#[derive(Debug, Serialize)]
struct Classification {
    venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host_name: Option<String>,
    normalized_venue: String,
    is_major_venue: bool,
    is_major_exhibition: bool,
    venue_type: VenueType,
}

/// Runs the classify command.
pub fn run(
    config: &Config,
    venue: &str,
    title: Option<&str>,
    host: Option<&str>,
    json: bool,
) -> Result<()> {
    let tables = config.venue_tables();
    let classifier = VenueClassifier::new(&tables);

    let classification = Classification {
        venue: venue.to_string(),
        title: title.map(String::from),
        host_name: host.map(String::from),
        normalized_venue: normalize(venue),
        is_major_venue: classifier.is_major_venue(venue),
        is_major_exhibition: classifier.is_major_exhibition(title, host),
        venue_type: classifier.classify(venue, title, host),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&classification)
                .context("failed to serialize classification")?
        );
    } else {
        print!("{}", render(&classification));
    }

    Ok(())
}

fn render(classification: &Classification) -> String {
    let mut out = String::new();
    out.push_str(&format!("venue:            {}\n", classification.venue));
    if let Some(title) = &classification.title {
        out.push_str(&format!("title:            {title}\n"));
    }
    if let Some(host_name) = &classification.host_name {
        out.push_str(&format!("host:             {host_name}\n"));
    }
    out.push_str(&format!(
        "normalized:       {}\n",
        classification.normalized_venue
    ));
    out.push_str(&format!(
        "major venue:      {}\n",
        classification.is_major_venue
    ));
    out.push_str(&format!(
        "major exhibition: {}\n",
        classification.is_major_exhibition
    ));
    out.push_str(&format!("type:             {}\n", classification.venue_type));
    out
}
