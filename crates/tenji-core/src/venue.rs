//! Venue and exhibition classification.
//!
//! Decides whether an announcement belongs to a major corporate gallery
//! or program (manufacturer salons, museums, nationwide photo events)
//! rather than an independent show. Matching is alias-based substring
//! containment over normalized text, tolerant of spelling variants and
//! partial official names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spelling corrections applied during normalization.
///
/// Inputs are whitespace-stripped and lowercased before these run, so
/// the Latin-script entry is written in lowercase.
const MISSPELLINGS: &[(&str, &str)] = &[
    ("フジフィルム", "フジフイルム"),
    ("富士フィルム", "富士フイルム"),
    ("キャノン", "キヤノン"),
    ("canon", "キヤノン"),
];

/// Canonicalizes text for alias comparison.
///
/// Strips all whitespace (including the full-width space), lowercases,
/// and applies the fixed misspelling table. Both sides of every
/// comparison go through this — raw text is never compared against a
/// normalized alias.
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut normalized = stripped.to_lowercase();
    for (variant, canonical) in MISSPELLINGS {
        normalized = normalized.replace(variant, canonical);
    }
    normalized
}

/// A set of text variants that all refer to one real-world entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCluster {
    /// Stable identifier for the entity, used in logs and config.
    pub label: String,
    /// Known spellings: romanized, katakana, partial, and misspelled forms.
    pub aliases: Vec<String>,
}

impl AliasCluster {
    /// Builds a cluster from borrowed strings.
    #[must_use]
    pub fn new(label: &str, aliases: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            aliases: aliases.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The curated alias tables the classifier matches against.
///
/// Static configuration: built once at process start and passed by
/// reference, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueTables {
    /// Venue-name clusters (galleries, salons, museums).
    pub venues: Vec<AliasCluster>,
    /// Exhibition/program-name clusters matched against title + host.
    pub exhibitions: Vec<AliasCluster>,
}

impl VenueTables {
    /// The built-in tables covering the known corporate galleries and
    /// nationwide photography programs.
    #[must_use]
    pub fn builtin() -> Self {
        let venues = vec![
            // Sony
            AliasCluster::new(
                "alpha-plaza-sapporo",
                &["αプラザ札幌", "アルファプラザ札幌", "α plaza 札幌"],
            ),
            AliasCluster::new(
                "alpha-plaza-nagoya",
                &["αプラザ名古屋", "アルファプラザ名古屋", "α plaza 名古屋"],
            ),
            AliasCluster::new(
                "alpha-plaza-osaka",
                &["αプラザ大阪", "アルファプラザ大阪", "α plaza 大阪"],
            ),
            AliasCluster::new(
                "alpha-plaza-fukuoka",
                &["αプラザ福岡天神", "アルファプラザ福岡天神", "α plaza 福岡"],
            ),
            AliasCluster::new(
                "sony-imaging-gallery",
                &["ソニーイメージングギャラリー銀座", "sony imaging gallery"],
            ),
            // Fujifilm
            AliasCluster::new(
                "fujifilm-photo-salon",
                &[
                    "富士フイルムフォトサロン",
                    "富士フィルムフォトサロン",
                    "フジフイルムフォトサロン",
                    "fujifilm photo salon",
                ],
            ),
            AliasCluster::new(
                "fujifilm-photo-salon-nagoya",
                &[
                    "富士フィルムフォトサロン名古屋",
                    "富士フイルムフォトサロン名古屋",
                    "フジフイルムフォトサロン名古屋",
                ],
            ),
            AliasCluster::new(
                "fujifilm-photo-salon-osaka",
                &[
                    "富士フィルムフォトサロン大阪",
                    "富士フイルムフォトサロン大阪",
                    "フジフイルムフォトサロン大阪",
                ],
            ),
            AliasCluster::new(
                "fujifilm-square",
                &[
                    "フジフイルムスクエア",
                    "フジフィルムスクエア",
                    "フジフイルム スクエア",
                    "fujifilm square",
                ],
            ),
            AliasCluster::new(
                "fuji-photo-gallery-ginza",
                &["富士フォトギャラリー銀座", "富士フィルムフォトギャラリー銀座"],
            ),
            AliasCluster::new(
                "fujifilm-imaging-plaza-tokyo",
                &[
                    "FUJIFILM Imaging Plaza東京",
                    "fujifilm imaging plaza 東京",
                    "フジフイルムイメージングプラザ東京",
                ],
            ),
            AliasCluster::new(
                "fujifilm-imaging-plaza-osaka",
                &[
                    "FUJIFILM Imaging Plaza大阪",
                    "fujifilm imaging plaza 大阪",
                    "フジフイルムイメージングプラザ大阪",
                ],
            ),
            // Canon. Single-token rule: any venue name containing the
            // brand matches. New clusters should prefer multi-token
            // phrases; a short alias like this widens the match to every
            // venue carrying the token.
            AliasCluster::new("canon", &["キヤノン"]),
            // Nikon
            AliasCluster::new("nikon-salon", &["ニコンサロン", "nikon salon"]),
            AliasCluster::new(
                "nikon-plaza-tokyo",
                &["ニコンプラザ東京", "nikon plaza 東京"],
            ),
            AliasCluster::new("nikon-plaza-osaka", &["ニコンプラザ大阪", "nikon plaza 大阪"]),
            // Epson
            AliasCluster::new(
                "epson-square-marunouchi",
                &["エプソンスクエア丸の内", "epson square 丸の内"],
            ),
            AliasCluster::new("epsite", &["エプサイト", "epsite"]),
            // Ricoh
            AliasCluster::new(
                "ricoh-imaging-square-tokyo",
                &["リコーイメージングスクエア東京", "ricoh imaging square 東京"],
            ),
            AliasCluster::new(
                "ricoh-imaging-square-osaka",
                &["リコーイメージングスクエア大阪", "ricoh imaging square 大阪"],
            ),
            // OM SYSTEM
            AliasCluster::new(
                "om-system-gallery",
                &["OM SYSTEM GALLERY", "om system gallery", "omシステムギャラリー"],
            ),
            // Other corporate galleries
            AliasCluster::new(
                "kenko-tokina-gallery",
                &["ケンコートキナーギャラリー", "kenko tokina gallery"],
            ),
            AliasCluster::new(
                "pictorico-gallery",
                &[
                    "ピクトリコショップ＆ギャラリー",
                    "pictrico shop gallery",
                    "ピクトリコギャラリー",
                ],
            ),
            AliasCluster::new(
                "leica-gallery",
                &[
                    "ライカギャラリー",
                    "leica gallery",
                    "ライカギャラリー東京",
                    "ライカストア東京",
                ],
            ),
            AliasCluster::new(
                "gr-space-tokyo",
                &[
                    "GR SPACE TOKYO",
                    "gr space tokyo",
                    "grスペース東京",
                    "grスペーストーキョー",
                ],
            ),
            // Museums and photography institutions
            AliasCluster::new(
                "top-museum",
                &[
                    "東京都写真美術館",
                    "東京都立写真美術館",
                    "tokyo photographic art museum",
                    "top museum",
                ],
            ),
            AliasCluster::new(
                "jcii-photo-salon",
                &["JCIIフォトサロン", "jcii photo salon", "jciiフォトサロン"],
            ),
        ];

        let exhibitions = vec![
            AliasCluster::new(
                "tokyo-camera-club",
                &["東京カメラ部", "tokyocameraclub", "Tokyo Camera Club"],
            ),
            AliasCluster::new(
                "cp-plus",
                &["CP+", "cameraandphoto imaging show", "シーピープラス"],
            ),
            AliasCluster::new("photo-day", &["写真の日", "フォトの日"]),
            AliasCluster::new(
                "world-press-photo",
                &["世界報道写真展", "world press photo"],
            ),
        ];

        Self {
            venues,
            exhibitions,
        }
    }
}

impl Default for VenueTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether an event is a major corporate exhibition or an independent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// Corporate gallery, museum, or large recurring program.
    Major,
    /// Solo or group show at an independent gallery.
    Independent,
}

impl VenueType {
    /// The wire form used in query strings and badges.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Independent => "independent",
        }
    }
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VenueType {
    type Err = UnknownVenueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "independent" => Ok(Self::Independent),
            _ => Err(UnknownVenueType(s.to_string())),
        }
    }
}

/// Error type for unknown venue type strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown venue type: {0}")]
pub struct UnknownVenueType(pub String);

/// Alias-based venue/exhibition classifier.
///
/// Aliases are normalized once at construction; classification then
/// reduces to substring checks per cluster. The classifier is immutable
/// and safe to share across threads.
#[derive(Debug, Clone)]
pub struct VenueClassifier {
    venue_patterns: Vec<Vec<String>>,
    exhibition_patterns: Vec<Vec<String>>,
}

impl VenueClassifier {
    /// Builds a classifier over the given tables.
    ///
    /// Aliases that normalize to the empty string are dropped: an empty
    /// pattern would be contained in every input.
    #[must_use]
    pub fn new(tables: &VenueTables) -> Self {
        Self {
            venue_patterns: normalize_clusters(&tables.venues),
            exhibition_patterns: normalize_clusters(&tables.exhibitions),
        }
    }

    /// Builds a classifier over the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(&VenueTables::builtin())
    }

    /// Whether the venue name identifies a major gallery or museum.
    ///
    /// Containment is symmetric: the venue containing an alias counts,
    /// and so does an alias containing the venue, so partial official
    /// names still match. Empty input never matches.
    #[must_use]
    pub fn is_major_venue(&self, venue_name: &str) -> bool {
        let normalized = normalize(venue_name);
        if normalized.is_empty() {
            return false;
        }
        cluster_match(&self.venue_patterns, &normalized)
    }

    /// Whether the title or host identifies a major exhibition program.
    ///
    /// Title and host are concatenated (missing parts contribute
    /// nothing) and matched against the exhibition tables.
    #[must_use]
    pub fn is_major_exhibition(&self, title: Option<&str>, host_name: Option<&str>) -> bool {
        let combined = format!("{} {}", title.unwrap_or(""), host_name.unwrap_or(""));
        let normalized = normalize(&combined);
        if normalized.is_empty() {
            return false;
        }
        cluster_match(&self.exhibition_patterns, &normalized)
    }

    /// Whether either the venue or the exhibition match reports major.
    #[must_use]
    pub fn is_major_event(
        &self,
        venue_name: &str,
        title: Option<&str>,
        host_name: Option<&str>,
    ) -> bool {
        self.is_major_venue(venue_name) || self.is_major_exhibition(title, host_name)
    }

    /// Overall classification. Malformed or empty inputs degrade to
    /// [`VenueType::Independent`]; this never fails.
    #[must_use]
    pub fn classify(
        &self,
        venue_name: &str,
        title: Option<&str>,
        host_name: Option<&str>,
    ) -> VenueType {
        if self.is_major_event(venue_name, title, host_name) {
            VenueType::Major
        } else {
            VenueType::Independent
        }
    }
}

impl Default for VenueClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_clusters(clusters: &[AliasCluster]) -> Vec<Vec<String>> {
    clusters
        .iter()
        .map(|cluster| {
            cluster
                .aliases
                .iter()
                .map(|alias| normalize(alias))
                .filter(|alias| !alias.is_empty())
                .collect()
        })
        .collect()
}

fn cluster_match(clusters: &[Vec<String>], normalized: &str) -> bool {
    clusters.iter().any(|aliases| {
        aliases
            .iter()
            .any(|alias| normalized.contains(alias.as_str()) || alias.contains(normalized))
    })
}
