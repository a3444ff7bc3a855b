// Tab-history store contract plus the in-memory implementation the shell
// wires in by default. The panel only ever reads one snapshot; archiving
// happens on the tab-close path, outside the panel.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::state::ClosedTab;

const MAX_CLOSED_TABS: usize = 25;

/// Store the panel snapshots its rows from, once, at view load.
pub trait ClosedTabStore: Send + Sync {
    /// Records in the order the panel should display them: most recently
    /// closed first.
    fn recently_closed_tabs(&self) -> Vec<ClosedTab>;
}

/// In-memory closed-tabs stack: archive on close, capped FIFO.
pub struct MemoryClosedTabStore {
    tabs: Mutex<VecDeque<ClosedTab>>,
}

impl MemoryClosedTabStore {
    pub fn new() -> Self {
        MemoryClosedTabStore {
            tabs: Mutex::new(VecDeque::new()),
        }
    }

    /// Archives a tab onto the stack, evicting the oldest past the cap.
    pub fn archive(&self, tab: ClosedTab) {
        let mut tabs = self.tabs.lock().unwrap();

        log::info!(
            "[ClosedTabs] Archived '{}' at URL: {}",
            tab.title.as_deref().unwrap_or(""),
            tab.url
        );
        tabs.push_back(tab);

        if tabs.len() > MAX_CLOSED_TABS {
            tabs.pop_front();
        }
    }

    /// Retrieves the last closed tab (LIFO), for plain "reopen last tab"
    /// callers that bypass the panel.
    pub fn pop_last(&self) -> Option<ClosedTab> {
        let tab = self.tabs.lock().unwrap().pop_back();

        if let Some(ref t) = tab {
            log::info!("[ClosedTabs] Restored tab at URL: {}", t.url);
        }

        tab
    }

    pub fn len(&self) -> usize {
        self.tabs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryClosedTabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosedTabStore for MemoryClosedTabStore {
    fn recently_closed_tabs(&self) -> Vec<ClosedTab> {
        self.tabs.lock().unwrap().iter().rev().cloned().collect()
    }
}
