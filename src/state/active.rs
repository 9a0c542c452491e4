//! Link rewriting and active-entry marking.
//!
//! Runs over a freshly rendered sidebar: every link is given its
//! root-relative prefix, resolved against the current page, and the first
//! one that names the current page is marked active with its sections
//! expanded.

use crate::dom::{Dom, NodeId};
use crate::location::{canonical_current_page, rewrite_href, Location};
use crate::view::constants::{ACTIVE_CLASS, CHAPTER_ITEM_CLASS, EXPANDED_CLASS};
use tracing::debug;

/// The active link and every row expanded to reveal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePath {
    /// The `a` element marked active.
    pub link: NodeId,
    /// Rows that were given the expanded class, nearest first.
    pub expanded: Vec<NodeId>,
}

/// Result of one pass over the rendered links.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkPass {
    /// The link marked active, if any matched.
    pub active: Option<ActivePath>,
    /// Number of `href`s that received the root-relative prefix.
    pub rewritten: usize,
}

/// Rewrite relative links below `root` and mark the one for `location`.
///
/// Anchors are visited in document order; those without an `href` (toggles)
/// are skipped but still count toward position. A link matches when its
/// resolved URL equals the canonical current page.
///
/// Alias rule: the first anchor also matches when `path_to_root` is empty and
/// the canonical current page ends in `/<default_document>`, so the site
/// root's default document shows the first chapter as active.
///
/// Only the first matching link is marked.
pub fn mark_active_links(
    dom: &mut Dom,
    root: NodeId,
    location: &Location,
    path_to_root: &str,
    default_document: &str,
) -> LinkPass {
    let current_page = canonical_current_page(location, default_document);
    let root_document_suffix = format!("/{default_document}");
    let mut pass = LinkPass::default();

    for (position, link) in dom.descendants_by_tag(root, "a").into_iter().enumerate() {
        let Some(href) = dom.attribute(link, "href").map(str::to_string) else {
            continue;
        };

        let href = match rewrite_href(&href, path_to_root) {
            Some(rewritten) => {
                dom.set_attribute(link, "href", &rewritten);
                pass.rewritten += 1;
                rewritten
            }
            None => href,
        };

        if pass.active.is_some() {
            continue;
        }

        let resolved = location.resolve(&href).href();
        let aliases_root = position == 0
            && path_to_root.is_empty()
            && current_page.ends_with(&root_document_suffix);

        if resolved == current_page || aliases_root {
            debug!(href = %href, resolved = %resolved, alias = aliases_root, "Active link found");
            pass.active = Some(reveal(dom, link));
        }
    }

    pass
}

/// Mark `link` active and expand every chapter row above it.
fn reveal(dom: &mut Dom, link: NodeId) -> ActivePath {
    dom.add_class(link, ACTIVE_CLASS);
    let mut expanded = Vec::new();

    let mut parent = dom.parent_element(link);
    if let Some(row) = parent.filter(|row| dom.has_class(*row, CHAPTER_ITEM_CLASS)) {
        dom.add_class(row, EXPANDED_CLASS);
        expanded.push(row);
    }

    while let Some(node) = parent {
        if dom.tag_name(node) == Some("li") {
            if let Some(sibling) = dom.previous_element_sibling(node) {
                if dom.has_class(sibling, CHAPTER_ITEM_CLASS) {
                    dom.add_class(sibling, EXPANDED_CLASS);
                    expanded.push(sibling);
                }
            }
        }
        parent = dom.parent_element(node);
    }

    ActivePath {
        link,
        expanded,
    }
}

#[cfg(test)]
#[path = "active_tests.rs"]
mod tests;
