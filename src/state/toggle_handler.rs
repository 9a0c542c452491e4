//! Section expand/collapse toggle handler.
//!
//! A toggle is an `a.toggle` inside a chapter row. Clicking it (or anything
//! inside it) flips `expanded` on that row. Active marking is untouched.

use crate::dom::{Dom, NodeId};
use crate::view::constants::{EXPANDED_CLASS, TOGGLE_CLASS};
use tracing::debug;

/// The row whose state changed and whether it is now expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// Chapter row that owns the toggle.
    pub row: NodeId,
    /// Whether the row is expanded after the click.
    pub expanded: bool,
}

/// Find the toggle control a click on `target` lands on, if any.
pub fn toggle_control_for(dom: &Dom, target: NodeId) -> Option<NodeId> {
    std::iter::once(target)
        .chain(dom.ancestors(target))
        .find(|node| dom.tag_name(*node) == Some("a") && dom.has_class(*node, TOGGLE_CLASS))
}

/// Handle a click on `target`, flipping the owning row if it hit a toggle.
pub fn handle_toggle_click(dom: &mut Dom, target: NodeId) -> Option<Toggled> {
    let control = toggle_control_for(dom, target)?;
    let row = dom.parent_element(control)?;
    let expanded = dom.toggle_class(row, EXPANDED_CLASS);
    debug!(row = row.index(), expanded, "Section toggled");
    Some(Toggled { row, expanded })
}
