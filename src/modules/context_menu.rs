// Context-menu wiring: the tagged context a panel is built with, the action
// model, and the two builders. Which action set a long-press produces is
// decided once, at panel construction, by the context variant - never by
// sniffing optional delegates at call time.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::library::{LibraryPanelDelegate, RecentlyClosedPanelDelegate};
use crate::state::DisplaySite;

/// Which action-builder a library panel routes long-presses to.
pub enum MenuContext {
    /// Full library action set, routed through the navigation delegate.
    Default {
        navigation: Arc<dyn LibraryPanelDelegate>,
    },
    /// Reduced, reopen-focused set built over the open-site delegate.
    RecentlyClosedOnly {
        opener: Arc<dyn RecentlyClosedPanelDelegate>,
    },
}

impl Clone for MenuContext {
    fn clone(&self) -> Self {
        match self {
            MenuContext::Default { navigation } => MenuContext::Default {
                navigation: navigation.clone(),
            },
            MenuContext::RecentlyClosedOnly { opener } => MenuContext::RecentlyClosedOnly {
                opener: opener.clone(),
            },
        }
    }
}

impl MenuContext {
    pub fn actions_for(&self, site: &DisplaySite) -> Vec<MenuAction> {
        match self {
            MenuContext::Default { navigation } => {
                default_context_menu_actions(site, navigation.clone())
            }
            MenuContext::RecentlyClosedOnly { opener } => {
                recently_closed_context_menu_actions(site, opener.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuActionKind {
    OpenInNewTab,
    OpenInNewPrivateTab,
    OpenInSameTab,
}

/// One row of a presented context menu: a labelled action carrying its
/// handler over the delegate the builder captured.
pub struct MenuAction {
    pub kind: MenuActionKind,
    pub title: String,
    handler: Box<dyn Fn() + Send + Sync>,
}

impl MenuAction {
    fn new(
        kind: MenuActionKind,
        title: &str,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        MenuAction {
            kind,
            title: title.to_string(),
            handler: Box::new(handler),
        }
    }

    pub fn perform(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAction")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .finish()
    }
}

/// A menu ready to present: the site it targets and its action rows.
#[derive(Debug)]
pub struct ContextMenu {
    pub site: DisplaySite,
    pub actions: Vec<MenuAction>,
}

/// Default library action set. Requires the navigation delegate.
pub fn default_context_menu_actions(
    site: &DisplaySite,
    navigation: Arc<dyn LibraryPanelDelegate>,
) -> Vec<MenuAction> {
    let Some(url) = parse_site_url(site) else {
        return Vec::new();
    };

    let new_tab_url = url.clone();
    let new_tab_nav = navigation.clone();
    let private_url = url;
    vec![
        MenuAction::new(MenuActionKind::OpenInNewTab, "Open in New Tab", move || {
            new_tab_nav.open_in_new_tab(&new_tab_url, false)
        }),
        MenuAction::new(
            MenuActionKind::OpenInNewPrivateTab,
            "Open in New Private Tab",
            move || navigation.open_in_new_tab(&private_url, true),
        ),
    ]
}

/// Reduced action set scoped to recently-closed semantics. Requires the
/// open-site delegate.
pub fn recently_closed_context_menu_actions(
    site: &DisplaySite,
    opener: Arc<dyn RecentlyClosedPanelDelegate>,
) -> Vec<MenuAction> {
    let Some(url) = parse_site_url(site) else {
        return Vec::new();
    };

    let same_tab_url = url.clone();
    let same_tab_opener = opener.clone();
    let new_tab_url = url.clone();
    let new_tab_opener = opener.clone();
    let private_url = url;
    vec![
        MenuAction::new(MenuActionKind::OpenInSameTab, "Open", move || {
            same_tab_opener.open_in_same_tab(&same_tab_url)
        }),
        MenuAction::new(MenuActionKind::OpenInNewTab, "Open in New Tab", move || {
            new_tab_opener.open_in_new_tab(&new_tab_url, false)
        }),
        MenuAction::new(
            MenuActionKind::OpenInNewPrivateTab,
            "Open in New Private Tab",
            move || opener.open_in_new_tab(&private_url, true),
        ),
    ]
}

fn parse_site_url(site: &DisplaySite) -> Option<Url> {
    match Url::parse(&site.url) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!(
                "[ContextMenu] Site URL '{}' did not parse, no actions built: {}",
                site.url,
                e
            );
            None
        }
    }
}
