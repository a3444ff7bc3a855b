// Shared data structs used across the panel modules.
// Records are owned by the tab-history store; the view-models here are
// derived on demand and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A tab the user closed, retained by the store for possible reopening.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ClosedTab {
    pub url: Url,
    pub title: Option<String>,
    pub closed_at: DateTime<Utc>,
}

impl ClosedTab {
    pub fn new(url: Url, title: Option<String>) -> Self {
        ClosedTab {
            url,
            title,
            closed_at: Utc::now(),
        }
    }
}

/// Transient site view-model handed to context-menu builders.
/// The title is the empty string when the record has none.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySite {
    pub url: String,
    pub title: String,
}

impl DisplaySite {
    pub fn from_record(record: &ClosedTab) -> Self {
        DisplaySite {
            url: record.url.to_string(),
            title: record.title.clone().unwrap_or_default(),
        }
    }
}

/// Fixed styling for the leading favicon slot of a row.
#[derive(Clone, Copy, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IconStyle {
    pub width: f32,
    pub height: f32,
    pub border_width: f32,
    pub border_color: &'static str,
}

/// The rendered form of one list row, shell-bound.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowViewModel {
    pub title: Option<String>,
    pub title_hidden: bool,
    pub description: String,
    pub icon: IconStyle,
}
