// Panel container: hosts the list controller as a full-bleed child and owns
// the delegate references it hands down. Delegates are injected up front -
// a caller that wants "fall back to the active browser" resolves that
// opener itself before constructing the panel.

use std::sync::Arc;

use crate::favicon::FaviconService;
use crate::library::{
    LibraryPanel, LibraryPanelDelegate, LibraryPanelMainState, RecentlyClosedPanelDelegate,
    ToolbarItem,
};
use crate::modules::closed_tab_store::ClosedTabStore;
use crate::modules::context_menu::MenuContext;
use crate::modules::layout::{self, EdgeInsets, Rect};
use crate::modules::site_list::SiteListController;
use crate::theme::ThemeHolder;

/// The profile/data context the panel is constructed over. Opaque to the
/// panel beyond being handed to its child: the stores and services belong
/// to the surrounding browser.
#[derive(Clone)]
pub struct PanelContext {
    pub recently_closed: Arc<dyn ClosedTabStore>,
    pub favicons: Arc<dyn FaviconService>,
    pub theme: Arc<ThemeHolder>,
}

pub struct RecentlyClosedTabsPanel {
    context: PanelContext,
    list: SiteListController,
    navigation: Option<Arc<dyn LibraryPanelDelegate>>,
    opener: Arc<dyn RecentlyClosedPanelDelegate>,
    menu_context: MenuContext,
    bounds: Rect,
    loaded: bool,
}

impl RecentlyClosedTabsPanel {
    /// The open-site delegate is required; the navigation delegate stays
    /// optional and its absence silently drops visit notifications. The
    /// menu context is fixed here, once, from what was supplied.
    pub fn new(
        context: PanelContext,
        opener: Arc<dyn RecentlyClosedPanelDelegate>,
        navigation: Option<Arc<dyn LibraryPanelDelegate>>,
    ) -> Self {
        let list = SiteListController::new(
            context.recently_closed.clone(),
            context.favicons.clone(),
        );
        let menu_context = match &navigation {
            Some(navigation) => MenuContext::Default {
                navigation: navigation.clone(),
            },
            None => MenuContext::RecentlyClosedOnly {
                opener: opener.clone(),
            },
        };
        RecentlyClosedTabsPanel {
            context,
            list,
            navigation,
            opener,
            menu_context,
            bounds: Rect::zero(),
            loaded: false,
        }
    }

    /// First display: propagate the delegates, anchor the child list to all
    /// four edges of the container, and let it take its snapshot. Runs
    /// once; later calls are no-ops.
    pub fn view_did_load(&mut self, bounds: Rect) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.bounds = bounds;

        self.list.set_navigation_delegate(self.navigation.clone());
        self.list.set_open_site_delegate(self.opener.clone());
        self.list.set_menu_context(self.menu_context.clone());

        self.list
            .set_bounds(layout::anchored(self.bounds, EdgeInsets::ZERO));
        self.list.view_did_load();
    }

    /// Container resize; the child stays anchored edge-to-edge.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.list
            .set_bounds(layout::anchored(self.bounds, EdgeInsets::ZERO));
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Theme-reapplication hook: no theming logic of its own, just a full
    /// redraw of the child list with whatever palette is current.
    pub fn apply_theme(&mut self) {
        let theme = self.context.theme.current();
        log::debug!("[Panel] Reapplying theme '{}'", theme.mode);
        self.list.reload_data();
    }

    pub fn list(&self) -> &SiteListController {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SiteListController {
        &mut self.list
    }
}

impl LibraryPanel for RecentlyClosedTabsPanel {
    fn main_state(&self) -> LibraryPanelMainState {
        LibraryPanelMainState::History { in_folder: true }
    }

    fn bottom_toolbar_items(&self) -> Vec<ToolbarItem> {
        Vec::new()
    }

    fn handle_back_button(&mut self) {
        self.list.handle_back_button();
    }

    fn handle_done_button(&mut self) {
        self.list.handle_done_button();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::FaviconTask;
    use crate::library::VisitType;
    use crate::modules::closed_tab_store::MemoryClosedTabStore;
    use crate::modules::context_menu::MenuActionKind;
    use crate::state::ClosedTab;
    use std::sync::Mutex;
    use url::Url;

    #[derive(Default)]
    struct NullFavicons;

    impl FaviconService for NullFavicons {
        fn request_favicon(&self, _site_url: &str) -> FaviconTask {
            FaviconTask::completed()
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        new_tab: Mutex<Vec<(String, bool)>>,
    }

    impl RecentlyClosedPanelDelegate for RecordingOpener {
        fn open_in_same_tab(&self, _url: &Url) {}

        fn open_in_new_tab(&self, url: &Url, is_private: bool) {
            self.new_tab
                .lock()
                .unwrap()
                .push((url.to_string(), is_private));
        }
    }

    #[derive(Default)]
    struct RecordingNavigation {
        selected: Mutex<Vec<(String, VisitType)>>,
    }

    impl LibraryPanelDelegate for RecordingNavigation {
        fn on_url_selected(&self, url: &Url, visit: VisitType) {
            self.selected.lock().unwrap().push((url.to_string(), visit));
        }

        fn open_in_new_tab(&self, _url: &Url, _is_private: bool) {}
    }

    fn context_with_one_tab() -> PanelContext {
        let store = MemoryClosedTabStore::new();
        store.archive(ClosedTab::new(
            Url::parse("https://a.test").unwrap(),
            Some("A".to_string()),
        ));
        PanelContext {
            recently_closed: Arc::new(store),
            favicons: Arc::new(NullFavicons),
            theme: Arc::new(ThemeHolder::default()),
        }
    }

    #[test]
    fn load_anchors_child_and_snapshots_store() {
        let opener = Arc::new(RecordingOpener::default());
        let mut panel = RecentlyClosedTabsPanel::new(context_with_one_tab(), opener, None);

        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        panel.view_did_load(bounds);

        assert_eq!(panel.bounds(), bounds);
        assert_eq!(panel.list().row_count(), 1);

        // Second load is a no-op
        panel.view_did_load(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(panel.bounds(), bounds);
    }

    #[test]
    fn taps_route_through_propagated_delegates() {
        let opener = Arc::new(RecordingOpener::default());
        let navigation = Arc::new(RecordingNavigation::default());
        let mut panel = RecentlyClosedTabsPanel::new(
            context_with_one_tab(),
            opener.clone(),
            Some(navigation.clone()),
        );
        panel.view_did_load(Rect::new(0.0, 0.0, 320.0, 480.0));

        panel.list_mut().did_select_row(0);

        assert_eq!(
            opener.new_tab.lock().unwrap().as_slice(),
            &[("https://a.test/".to_string(), false)]
        );
        assert_eq!(
            navigation.selected.lock().unwrap().as_slice(),
            &[("https://a.test/".to_string(), VisitType::Typed)]
        );
    }

    #[test]
    fn menu_context_follows_navigation_delegate_presence() {
        let opener = Arc::new(RecordingOpener::default());

        let mut with_nav = RecentlyClosedTabsPanel::new(
            context_with_one_tab(),
            opener.clone(),
            Some(Arc::new(RecordingNavigation::default())),
        );
        with_nav.view_did_load(Rect::new(0.0, 0.0, 320.0, 480.0));
        let menu = with_nav.list().context_menu(0).unwrap();
        let kinds: Vec<_> = menu.actions.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![MenuActionKind::OpenInNewTab, MenuActionKind::OpenInNewPrivateTab]
        );

        let mut without_nav =
            RecentlyClosedTabsPanel::new(context_with_one_tab(), opener, None);
        without_nav.view_did_load(Rect::new(0.0, 0.0, 320.0, 480.0));
        let menu = without_nav.list().context_menu(0).unwrap();
        let kinds: Vec<_> = menu.actions.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MenuActionKind::OpenInSameTab,
                MenuActionKind::OpenInNewTab,
                MenuActionKind::OpenInNewPrivateTab,
            ]
        );
    }

    #[test]
    fn apply_theme_only_redraws_the_child() {
        let opener = Arc::new(RecordingOpener::default());
        let context = context_with_one_tab();
        let theme = context.theme.clone();
        let mut panel = RecentlyClosedTabsPanel::new(context, opener, None);
        panel.view_did_load(Rect::new(0.0, 0.0, 320.0, 480.0));

        let mut light = crate::theme::Theme::default();
        light.mode = "light".to_string();
        theme.set(light);

        let before = panel.list().redraw_generation();
        panel.apply_theme();
        assert_eq!(panel.list().redraw_generation(), before + 1);
        assert_eq!(panel.list().row_count(), 1);
    }

    #[test]
    fn resize_keeps_child_edge_anchored() {
        let opener = Arc::new(RecordingOpener::default());
        let mut panel = RecentlyClosedTabsPanel::new(context_with_one_tab(), opener, None);
        panel.view_did_load(Rect::new(0.0, 0.0, 320.0, 480.0));

        panel.set_bounds(Rect::new(0.0, 0.0, 768.0, 1024.0));
        assert_eq!(panel.bounds(), Rect::new(0.0, 0.0, 768.0, 1024.0));
    }

    #[test]
    fn panel_reports_library_conformance() {
        let opener = Arc::new(RecordingOpener::default());
        let mut panel = RecentlyClosedTabsPanel::new(context_with_one_tab(), opener, None);
        assert_eq!(
            panel.main_state(),
            LibraryPanelMainState::History { in_folder: true }
        );
        assert!(panel.bottom_toolbar_items().is_empty());
        panel.handle_back_button();
        panel.handle_done_button();
    }
}
