// Recently Closed Tabs Panel - Library Entry Point
// This file exposes all modules so the embedding shell can compose the
// panel and each piece can be tested independently.

// Collaborator contracts and shared conventions
pub mod favicon;
pub mod library;
pub mod theme;

// Shared data structs
pub mod state;

// Pure logic modules (no shell imports)
pub mod modules;

pub use modules::panel::{PanelContext, RecentlyClosedTabsPanel};
pub use modules::site_list::{GestureState, SiteListController};
