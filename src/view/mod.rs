//! Table-of-contents rendering.
//!
//! Walks a [`NavigationTree`] and describes the sidebar markup to a
//! [`NodeBuilder`]. Nothing here knows whether the result becomes an
//! in-memory tree or an HTML string.
//!
//! Layout of one chapter with children:
//!
//! ```text
//! <li class="chapter-item expanded"><a href="g/index.html"><strong aria-hidden="true">1.</strong> Guide</a></li>
//! <li><ol class="section"> ...children... </ol></li>
//! ```
//!
//! The nested list sits in the row *after* the chapter row, which is what
//! lets the controller find a section's chapter via its previous sibling.

pub mod constants;

use crate::dom::NodeBuilder;
use crate::model::{NavigationEntry, NavigationTree, TocItem};
use constants::*;
use serde::Deserialize;

/// Folding of deep sections.
///
/// When disabled, every chapter row is expanded and no toggles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoldSettings {
    /// Emit toggles and start deep sections collapsed.
    #[serde(default)]
    pub enable: bool,
    /// Chapters shallower than this depth start expanded.
    #[serde(default)]
    pub level: usize,
}

/// Options for [`render_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Section folding and toggle controls.
    pub fold: FoldSettings,
}

/// Emit the full sidebar markup for `tree`.
pub fn render_tree(tree: &NavigationTree, options: &RenderOptions, builder: &mut impl NodeBuilder) {
    render_list(tree.items(), CHAPTER_LIST_CLASS, options, builder);
}

fn render_list(
    items: &[TocItem],
    list_class: &str,
    options: &RenderOptions,
    builder: &mut impl NodeBuilder,
) {
    builder.start_element("ol", &[("class", list_class)]);
    for item in items {
        match item {
            TocItem::Chapter(entry) => render_chapter(entry, options, builder),
            TocItem::Separator => {
                builder.start_element("li", &[("class", SPACER_CLASS)]);
                builder.end_element();
            }
            TocItem::PartTitle { title } => {
                builder.start_element("li", &[("class", PART_TITLE_CLASS)]);
                builder.text(title);
                builder.end_element();
            }
        }
    }
    builder.end_element();
}

fn render_chapter(entry: &NavigationEntry, options: &RenderOptions, builder: &mut impl NodeBuilder) {
    let class = chapter_classes(entry, &options.fold);
    builder.start_element("li", &[("class", class.as_str())]);

    match entry.path() {
        Some(path) => builder.start_element("a", &[("href", path.as_str())]),
        None => builder.start_element("div", &[]),
    }
    if let Some(number) = entry.number() {
        builder.start_element("strong", &[("aria-hidden", "true")]);
        builder.text(&number.to_string());
        builder.end_element();
        builder.text(" ");
    }
    builder.text(entry.label());
    builder.end_element();

    if options.fold.enable && !entry.children().is_empty() {
        builder.start_element("a", &[("class", TOGGLE_CLASS)]);
        builder.start_element("div", &[]);
        builder.text(TOGGLE_GLYPH);
        builder.end_element();
        builder.end_element();
    }
    builder.end_element();

    if !entry.children().is_empty() {
        builder.start_element("li", &[]);
        render_list(entry.children(), SECTION_LIST_CLASS, options, builder);
        builder.end_element();
    }
}

fn chapter_classes(entry: &NavigationEntry, fold: &FoldSettings) -> String {
    let mut classes = vec![CHAPTER_ITEM_CLASS];
    if !fold.enable || entry.depth() < fold.level {
        classes.push(EXPANDED_CLASS);
    }
    if entry.is_affix() {
        classes.push(AFFIX_CLASS);
    }
    classes.join(" ")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
