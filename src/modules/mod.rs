// Module exports for pure logic
pub mod closed_tab_store;    // Tab-history store contract + in-memory impl
pub mod context_menu;        // Tagged menu context and action builders
pub mod display_url;         // URL presentation normalization
pub mod layout;              // Rects, edge anchoring, row hit-testing
pub mod panel;               // Panel container
pub mod site_list;           // List controller
