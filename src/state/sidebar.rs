//! The sidebar controller.
//!
//! Owns the sidebar element and drives it through its two events: attach
//! (render, mark, restore scroll) and click (remember scroll, toggle).

use super::active::{mark_active_links, ActivePath};
use super::scroll_memory::{remember_scroll, restore_scroll, ScrollRestore};
use super::toggle_handler::{handle_toggle_click, Toggled};
use crate::dom::{Dom, NodeId};
use crate::location::Location;
use crate::model::NavigationTree;
use crate::storage::{SessionStorage, SCROLL_KEY};
use crate::view::constants::SIDEBAR_TAG;
use crate::view::{render_tree, RenderOptions};
use tracing::{debug, info};

/// Settings the controller needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSettings {
    /// Appended to directory locations before matching.
    pub default_document: String,
    /// Session storage key for the remembered scroll offset.
    pub storage_key: String,
    /// How the tree is rendered.
    pub render: RenderOptions,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            default_document: "index.html".to_string(),
            storage_key: SCROLL_KEY.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// The page the sidebar is being attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Address of the displayed page.
    pub location: Location,
    /// Prefix from this page back to the site root (`""`, `"../"`, ...).
    pub path_to_root: String,
}

impl PageContext {
    /// Page at `location`, `path_to_root` away from the site root.
    pub fn new(location: Location, path_to_root: impl Into<String>) -> Self {
        Self {
            location,
            path_to_root: path_to_root.into(),
        }
    }
}

/// Summary of one attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachReport {
    /// The active link and the rows expanded for it.
    pub active: Option<ActivePath>,
    /// What happened to the sidebar scroll position.
    pub scroll: ScrollRestore,
    /// Number of hrefs given the root-relative prefix.
    pub rewritten_links: usize,
}

/// Summary of one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    /// The click landed on a link and the scroll offset was stored.
    pub scroll_remembered: bool,
    /// The click landed on a toggle.
    pub toggled: Option<Toggled>,
}

/// Sidebar element plus the state that drives it.
pub struct SidebarController<S: SessionStorage> {
    tree: NavigationTree,
    settings: SidebarSettings,
    storage: S,
    dom: Dom,
    active: Option<ActivePath>,
}

impl<S: SessionStorage> SidebarController<S> {
    /// A controller with nothing rendered yet.
    pub fn new(tree: NavigationTree, settings: SidebarSettings, storage: S) -> Self {
        Self {
            tree,
            settings,
            storage,
            dom: Dom::new(SIDEBAR_TAG),
            active: None,
        }
    }

    /// Attach to a page: render, mark the active entry, restore scroll.
    ///
    /// Replaces whatever an earlier attach rendered.
    pub fn attach(&mut self, page: &PageContext) -> AttachReport {
        let root = self.dom.root();
        self.dom.clear_children();
        render_tree(&self.tree, &self.settings.render, &mut self.dom.builder(root));

        let pass = mark_active_links(
            &mut self.dom,
            root,
            &page.location,
            &page.path_to_root,
            &self.settings.default_document,
        );
        self.active = pass.active.clone();

        let scroll = restore_scroll(
            &mut self.dom,
            &mut self.storage,
            &self.settings.storage_key,
            self.active.as_ref().map(|a| a.link),
        );

        let active_label = self
            .active
            .as_ref()
            .map(|active| self.dom.text_content(active.link));
        info!(
            location = %page.location,
            path_to_root = %page.path_to_root,
            active = ?active_label,
            rewritten = pass.rewritten,
            scroll = ?scroll,
            "Sidebar attached"
        );

        AttachReport {
            active: pass.active,
            scroll,
            rewritten_links: pass.rewritten,
        }
    }

    /// Dispatch a click on `target` inside the sidebar.
    pub fn click(&mut self, target: NodeId) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();

        if self.dom.tag_name(target) == Some("a") {
            remember_scroll(&self.dom, &mut self.storage, &self.settings.storage_key);
            outcome.scroll_remembered = true;
        }
        outcome.toggled = handle_toggle_click(&mut self.dom, target);

        debug!(target = target.index(), ?outcome, "Sidebar click");
        outcome
    }

    /// User scrolled the sidebar.
    pub fn set_scroll_top(&mut self, offset: u32) {
        self.dom.set_scroll_top(offset);
    }

    /// Current sidebar scroll offset.
    pub fn scroll_top(&self) -> u32 {
        self.dom.scroll_top()
    }

    /// The sidebar element tree.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Result of the last attach's active marking.
    pub fn active(&self) -> Option<&ActivePath> {
        self.active.as_ref()
    }

    /// Settings the controller was created with.
    pub fn settings(&self) -> &SidebarSettings {
        &self.settings
    }

    /// The session storage backing scroll memory.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, e.g. to hand it to the next page's controller.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// All anchors in the sidebar, document order.
    pub fn links(&self) -> Vec<NodeId> {
        self.dom.descendants_by_tag(self.dom.root(), "a")
    }

    /// First link whose `href` equals `href` exactly.
    pub fn find_link(&self, href: &str) -> Option<NodeId> {
        self.links()
            .into_iter()
            .find(|link| self.dom.attribute(*link, "href") == Some(href))
    }

    /// Current sidebar content as HTML.
    pub fn render_html(&self) -> String {
        self.dom.inner_html(self.dom.root())
    }
}

#[cfg(test)]
#[path = "sidebar_tests.rs"]
mod tests;
