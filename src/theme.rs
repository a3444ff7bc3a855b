use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Colors the panel reads when it redraws. The theming engine that decides
/// these values lives outside the panel; a theme-change signal stores a new
/// palette here and then calls the container's `apply_theme` hook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub mode: String, // "dark", "light", "system"
    pub header_background: String,
    pub row_background: String,
    pub text: String,
    pub secondary_text: String,
    pub separator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
            header_background: "#1c1b22".to_string(),
            row_background: "#2b2a33".to_string(),
            text: "#fbfbfe".to_string(),
            secondary_text: "#8f8f9d".to_string(),
            separator: "#52525e".to_string(),
        }
    }
}

/// Lock-free holder for the current palette. Redraws load it on the hot
/// path; theme changes swap the whole palette at once.
pub struct ThemeHolder {
    current: ArcSwap<Theme>,
}

impl ThemeHolder {
    pub fn new(theme: Theme) -> Self {
        ThemeHolder {
            current: ArcSwap::from_pointee(theme),
        }
    }

    pub fn current(&self) -> Arc<Theme> {
        self.current.load_full()
    }

    pub fn set(&self, theme: Theme) {
        self.current.store(Arc::new(theme));
    }
}

impl Default for ThemeHolder {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
