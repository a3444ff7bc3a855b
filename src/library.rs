// Library-panel family conventions: the delegate capabilities panels route
// gestures to, visit classification for the history subsystem, and the
// toolbar conformance surface shared by every library screen.

use serde::{Deserialize, Serialize};
use url::Url;

/// How a navigation was initiated, as recorded by the history subsystem.
/// Reopened closed tabs report `Typed`, which history counts like an
/// address-bar visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisitType {
    Link,
    Typed,
    Bookmark,
}

/// Navigation delegate owned by the main browser controller. Selection
/// events from any library panel land here.
pub trait LibraryPanelDelegate: Send + Sync {
    fn on_url_selected(&self, url: &Url, visit: VisitType);
    fn open_in_new_tab(&self, url: &Url, is_private: bool);
}

/// Open-site delegate for recently closed tabs. Tap handling uses only the
/// new-tab variant; the same-tab variant is exposed for context-menu
/// actions and other collaborators.
pub trait RecentlyClosedPanelDelegate: Send + Sync {
    fn open_in_same_tab(&self, url: &Url);
    fn open_in_new_tab(&self, url: &Url, is_private: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryPanelMainState {
    Bookmarks,
    History { in_folder: bool },
    Downloads,
}

/// A bottom-toolbar button slot. Panels that need none return an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarItem {
    pub id: String,
    pub title: String,
}

/// Conformance surface every library screen shares.
pub trait LibraryPanel {
    fn main_state(&self) -> LibraryPanelMainState;

    fn bottom_toolbar_items(&self) -> Vec<ToolbarItem> {
        Vec::new()
    }

    fn handle_back_button(&mut self) {}

    fn handle_done_button(&mut self) {}
}
