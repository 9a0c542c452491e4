//! Markup names shared by the renderer and the sidebar controller.
//!
//! Stylesheets and the controller both key off these, so they live in one
//! place.

/// Tag of the custom sidebar element that hosts the tree.
pub const SIDEBAR_TAG: &str = "mdbook-sidebar-scrollbox";

/// Class of the outermost list.
pub const CHAPTER_LIST_CLASS: &str = "chapter";

/// Class of every nested list.
pub const SECTION_LIST_CLASS: &str = "section";

/// Class of a row that holds a chapter link (or draft label).
///
/// The row that follows it, if it wraps a nested list, is that chapter's
/// section container.
pub const CHAPTER_ITEM_CLASS: &str = "chapter-item";

/// Presence on a chapter row makes its following section visible.
pub const EXPANDED_CLASS: &str = "expanded";

/// Unnumbered front/back matter chapters.
pub const AFFIX_CLASS: &str = "affix";

/// The link for the page being displayed.
pub const ACTIVE_CLASS: &str = "active";

/// Expand/collapse control anchor.
pub const TOGGLE_CLASS: &str = "toggle";

/// Empty spacer row between chapter groups.
pub const SPACER_CLASS: &str = "spacer";

/// Unlinked heading row.
pub const PART_TITLE_CLASS: &str = "part-title";

/// Glyph inside a toggle control.
pub const TOGGLE_GLYPH: &str = "❱";
