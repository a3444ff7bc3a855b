// List controller for the recently-closed panel: renders the one-shot
// snapshot of closed-tab records, routes taps to the delegates, and turns
// long-presses into context menus.

use std::sync::Arc;

use dashmap::DashMap;

use crate::favicon::{FaviconService, FaviconTask};
use crate::library::{LibraryPanelDelegate, RecentlyClosedPanelDelegate, VisitType};
use crate::modules::closed_tab_store::ClosedTabStore;
use crate::modules::context_menu::{ContextMenu, MenuAction, MenuContext};
use crate::modules::display_url;
use crate::modules::layout::{self, Point, Rect};
use crate::state::{ClosedTab, DisplaySite, IconStyle, RowViewModel};

pub const ROW_HEIGHT: f32 = 58.0;
const SECTION_HEADER_HEIGHT: f32 = 0.0;

const ICON_SIZE: f32 = 23.0;
const ICON_BORDER_WIDTH: f32 = 0.5;
const ICON_BORDER_COLOR: &str = "#d7d7db";

pub const ACCESSIBILITY_IDENTIFIER: &str = "Recently Closed Tabs List";

/// Recognizer phases for the long-press gesture. Only `Began` is acted on;
/// the recognizer keeps firing while held and those repeats are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Began,
    Changed,
    Ended,
    Cancelled,
}

pub struct SiteListController {
    store: Arc<dyn ClosedTabStore>,
    favicons: Arc<dyn FaviconService>,

    navigation: Option<Arc<dyn LibraryPanelDelegate>>,
    opener: Option<Arc<dyn RecentlyClosedPanelDelegate>>,
    menu_context: Option<MenuContext>,

    // Snapshot taken once at view load and read-only afterwards.
    rows: Vec<ClosedTab>,
    loaded: bool,

    bounds: Rect,
    scroll_offset: f32,
    selected_row: Option<usize>,
    presented_menu: Option<ContextMenu>,
    redraw_generation: u64,

    // One in-flight favicon fetch per row slot; replacing a slot cancels
    // the fetch that was still targeting it.
    favicon_slots: DashMap<usize, FaviconTask>,
}

impl SiteListController {
    pub fn new(store: Arc<dyn ClosedTabStore>, favicons: Arc<dyn FaviconService>) -> Self {
        SiteListController {
            store,
            favicons,
            navigation: None,
            opener: None,
            menu_context: None,
            rows: Vec::new(),
            loaded: false,
            bounds: Rect::zero(),
            scroll_offset: 0.0,
            selected_row: None,
            presented_menu: None,
            redraw_generation: 0,
            favicon_slots: DashMap::new(),
        }
    }

    pub fn set_navigation_delegate(&mut self, delegate: Option<Arc<dyn LibraryPanelDelegate>>) {
        self.navigation = delegate;
    }

    pub fn set_open_site_delegate(&mut self, delegate: Arc<dyn RecentlyClosedPanelDelegate>) {
        self.opener = Some(delegate);
    }

    pub fn set_menu_context(&mut self, context: MenuContext) {
        self.menu_context = Some(context);
    }

    /// Snapshots the store. Runs once; later calls are no-ops so a panel
    /// instance never refreshes its rows (reopening the panel re-snapshots).
    pub fn view_did_load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.rows = self.store.recently_closed_tabs();
        log::info!("[RecentlyClosed] Loaded {} closed tabs", self.rows.len());
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn accessibility_identifier(&self) -> &'static str {
        ACCESSIBILITY_IDENTIFIER
    }

    pub fn number_of_sections(&self) -> usize {
        1
    }

    pub fn section_header_height(&self) -> f32 {
        SECTION_HEADER_HEIGHT
    }

    pub fn row_height(&self) -> f32 {
        ROW_HEIGHT
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Transient touch-down highlight, owned by the embedding shell.
    pub fn set_selected_row(&mut self, index: Option<usize>) {
        self.selected_row = index;
    }

    /// Builds the view-model for one row and kicks off its favicon fetch.
    /// The fetch still pending for a reused slot is cancelled first.
    pub fn render(&self, index: usize) -> Option<RowViewModel> {
        let tab = match self.rows.get(index) {
            Some(tab) => tab,
            None => {
                log::warn!("[RecentlyClosed] Render request for row {} out of range", index);
                return None;
            }
        };

        let title = tab.title.clone();
        let title_hidden = title.as_deref().map_or(true, |t| t.is_empty());
        let description = display_url::display_string(tab.url.as_str());

        let task = self.favicons.request_favicon(tab.url.as_str());
        if let Some(mut previous) = self.favicon_slots.insert(index, task) {
            previous.cancel();
        }

        Some(RowViewModel {
            title,
            title_hidden,
            description,
            icon: IconStyle {
                width: ICON_SIZE,
                height: ICON_SIZE,
                border_width: ICON_BORDER_WIDTH,
                border_color: ICON_BORDER_COLOR,
            },
        })
    }

    /// Rendered list snapshot for the embedding shell.
    pub fn rows_payload(&self) -> serde_json::Value {
        let rows: Vec<RowViewModel> = (0..self.rows.len())
            .filter_map(|index| self.render(index))
            .collect();
        serde_json::json!({
            "accessibilityIdentifier": ACCESSIBILITY_IDENTIFIER,
            "sections": self.number_of_sections(),
            "rows": rows,
        })
    }

    /// Tap on a row: clear the visual selection, open the site in a new
    /// non-private tab, then notify navigation of a typed visit - in that
    /// order, unconditionally.
    pub fn did_select_row(&mut self, index: usize) {
        let url = match self.rows.get(index) {
            Some(tab) => tab.url.clone(),
            None => {
                log::warn!("[RecentlyClosed] Tap on row {} out of range", index);
                return;
            }
        };

        self.selected_row = None;

        match &self.opener {
            Some(opener) => opener.open_in_new_tab(&url, false),
            None => log::debug!("[RecentlyClosed] No open-site delegate, tap dropped"),
        }
        match &self.navigation {
            Some(navigation) => navigation.on_url_selected(&url, VisitType::Typed),
            None => log::debug!("[RecentlyClosed] No navigation delegate, visit not recorded"),
        }
    }

    /// Long-press entry point. Acts on the `Began` phase only, hit-tests
    /// the touch point against row geometry, and presents the row's menu.
    pub fn long_press(&mut self, state: GestureState, location: Point) {
        if state != GestureState::Began {
            return;
        }
        let index = match layout::row_index_at(
            location,
            self.bounds,
            self.scroll_offset,
            ROW_HEIGHT,
            self.rows.len(),
        ) {
            Some(index) => index,
            None => return,
        };
        self.present_context_menu(index);
    }

    pub fn present_context_menu(&mut self, index: usize) {
        let menu = self.context_menu(index);
        self.present_context_menu_with(move || menu);
    }

    /// Presents whatever menu the completion supplies; `None` presents
    /// nothing.
    pub fn present_context_menu_with<F>(&mut self, completion: F)
    where
        F: FnOnce() -> Option<ContextMenu>,
    {
        match completion() {
            Some(menu) => {
                log::debug!("[RecentlyClosed] Presenting context menu for {}", menu.site.url);
                self.presented_menu = Some(menu);
            }
            None => log::debug!("[RecentlyClosed] Context menu completion returned nothing"),
        }
    }

    pub fn presented_menu(&self) -> Option<&ContextMenu> {
        self.presented_menu.as_ref()
    }

    pub fn dismiss_context_menu(&mut self) {
        self.presented_menu = None;
    }

    pub fn context_menu(&self, index: usize) -> Option<ContextMenu> {
        let site = self.site_details(index)?;
        let actions = self.context_menu_actions(&site, index)?;
        Some(ContextMenu { site, actions })
    }

    /// Site view-model for the context menu; empty title when the record
    /// has none.
    pub fn site_details(&self, index: usize) -> Option<DisplaySite> {
        self.rows.get(index).map(DisplaySite::from_record)
    }

    /// Action list for the row's menu, chosen by the configured context.
    /// The row index is accepted for interface parity but the selection is
    /// a pure function of the context variant.
    pub fn context_menu_actions(
        &self,
        site: &DisplaySite,
        _index: usize,
    ) -> Option<Vec<MenuAction>> {
        match &self.menu_context {
            Some(context) => Some(context.actions_for(site)),
            None => {
                log::debug!("[RecentlyClosed] No menu context configured");
                None
            }
        }
    }

    /// Redraw request from the container (theme changes land here). The
    /// snapshot is untouched; rows re-render on the next pass.
    pub fn reload_data(&mut self) {
        self.redraw_generation += 1;
    }

    pub fn redraw_generation(&self) -> u64 {
        self.redraw_generation
    }

    // Library toolbar conformance; these buttons do nothing on this panel.
    pub fn handle_back_button(&mut self) {}

    pub fn handle_done_button(&mut self) {}
}

impl Drop for SiteListController {
    fn drop(&mut self) {
        for mut entry in self.favicon_slots.iter_mut() {
            entry.value_mut().cancel();
        }
    }
}
