//! Types returned by (and sent to) the discovery/request backend.

use serde::{Deserialize, Serialize};

/// Kind of media a discovery entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film
    Movie,
    /// Television series
    Tv,
}

impl MediaKind {
    /// Wire token used in request bodies (`"movie"` / `"tv"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Short label for result cards.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Tv => "TV",
        }
    }
}

/// A single entry produced by the discovery backend. Read-only to this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredMedia {
    /// Backend id, used when requesting the item.
    pub id: u64,
    /// Title, populated for movies.
    #[serde(default)]
    pub title: Option<String>,
    /// Name, populated for series.
    #[serde(default)]
    pub name: Option<String>,
    /// CDN poster path (leading slash included), if any.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// CDN backdrop path, if any.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date (`YYYY-MM-DD`), movies only.
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (`YYYY-MM-DD`), series only.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Community vote average, 0.0 when unrated.
    #[serde(default)]
    pub vote_average: f32,
    /// Whether this is a movie or a series.
    pub media_type: MediaKind,
}

impl DiscoveredMedia {
    /// Display title: movies carry `title`, series carry `name`.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown Title")
    }

    /// Release year, taken from whichever date field is populated.
    pub fn year(&self) -> Option<&str> {
        let date = self
            .release_date
            .as_deref()
            .or(self.first_air_date.as_deref())?;
        date.split('-').next().filter(|year| !year.is_empty())
    }

    /// One-decimal vote average, `"N/A"` when the backend has no votes.
    pub fn rating_label(&self) -> String {
        if self.vote_average > 0.0 {
            format!("{:.1}", self.vote_average)
        } else {
            "N/A".to_string()
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Entries for this page.
    pub results: Vec<DiscoveredMedia>,
    /// 1-based page number.
    pub page: u32,
    /// Total pages available.
    pub total_pages: u32,
    /// Total entries across all pages.
    pub total_results: u32,
}

/// Terminal outcome of a media request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOutcome {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Failure message, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestOutcome {
    /// Failed outcome carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Connectivity report from the discovery backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    /// Whether the backend reports itself reachable and configured.
    pub connected: bool,
    /// Failure message, absent when connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendStatus {
    /// Disconnected status carrying `error`.
    pub fn disconnected(error: impl Into<String>) -> Self {
        Self {
            connected: false,
            error: Some(error.into()),
        }
    }
}
