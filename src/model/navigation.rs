//! Navigation tree produced by the documentation generator.
//!
//! The tree is read-only once loaded. Depths are derived from nesting when
//! the tree is built, so generator output never has to carry them.

use super::error::TreeError;
use super::identifiers::{SectionNumber, TargetPath};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One row of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TocItem {
    /// A page (or a draft page without a target).
    Chapter(NavigationEntry),
    /// Visual gap between groups of chapters.
    Separator,
    /// Unlinked heading that starts a new part of the book.
    PartTitle {
        /// Heading text.
        title: String,
    },
}

impl From<NavigationEntry> for TocItem {
    fn from(entry: NavigationEntry) -> Self {
        TocItem::Chapter(entry)
    }
}

/// A chapter in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationEntry {
    label: String,
    #[serde(default)]
    path: Option<TargetPath>,
    #[serde(default)]
    number: Option<SectionNumber>,
    #[serde(skip)]
    depth: usize,
    #[serde(default)]
    children: Vec<TocItem>,
}

impl NavigationEntry {
    /// Create a linked chapter with no number and no children.
    pub fn new(label: impl Into<String>, path: TargetPath) -> Self {
        Self {
            label: label.into(),
            path: Some(path),
            number: None,
            depth: 0,
            children: Vec::new(),
        }
    }

    /// Create a draft chapter: listed in the sidebar but without a page.
    pub fn draft(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
            number: None,
            depth: 0,
            children: Vec::new(),
        }
    }

    /// Attach a section number.
    pub fn numbered(mut self, number: SectionNumber) -> Self {
        self.number = Some(number);
        self
    }

    /// Replace the nested items.
    pub fn with_children(mut self, children: Vec<TocItem>) -> Self {
        self.children = children;
        self
    }

    /// Text shown in the sidebar.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Root-relative page path; `None` for drafts.
    pub fn path(&self) -> Option<&TargetPath> {
        self.path.as_ref()
    }

    /// Section number; `None` for affix chapters.
    pub fn number(&self) -> Option<&SectionNumber> {
        self.number.as_ref()
    }

    /// Nesting depth, 0 for top-level chapters.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nested items, in order.
    pub fn children(&self) -> &[TocItem] {
        &self.children
    }

    /// Unnumbered chapters are front or back matter.
    pub fn is_affix(&self) -> bool {
        self.number.is_none()
    }

    /// Draft chapters have no page yet.
    pub fn is_draft(&self) -> bool {
        self.path.is_none()
    }

    fn assign_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            if let TocItem::Chapter(entry) = child {
                entry.assign_depth(depth + 1);
            }
        }
    }
}

/// The full table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationTree {
    #[serde(default)]
    items: Vec<TocItem>,
}

impl NavigationTree {
    /// Build a tree from top-level items, assigning depths.
    pub fn new(items: Vec<TocItem>) -> Self {
        let mut tree = Self { items };
        tree.assign_depths();
        tree
    }

    /// Parse generator output in JSON form.
    pub fn from_json(source: &str) -> Result<Self, TreeError> {
        let mut tree: Self = serde_json::from_str(source).map_err(|e| TreeError::Json {
            reason: e.to_string(),
        })?;
        tree.assign_depths();
        Ok(tree)
    }

    /// Parse generator output in TOML form.
    pub fn from_toml(source: &str) -> Result<Self, TreeError> {
        let mut tree: Self = toml::from_str(source).map_err(|e| TreeError::Toml {
            reason: e.to_string(),
        })?;
        tree.assign_depths();
        Ok(tree)
    }

    /// Load a tree file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let format = path.extension().and_then(|ext| ext.to_str());
        let parse: fn(&str) -> Result<Self, TreeError> = match format {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            other => {
                return Err(TreeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension: other.map(str::to_string),
                })
            }
        };

        let contents = std::fs::read_to_string(path).map_err(|source| TreeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let tree = parse(&contents)?;
        debug!(
            path = %path.display(),
            entries = tree.entries().count(),
            drafts = tree.entries().filter(|entry| entry.is_draft()).count(),
            "Navigation tree loaded"
        );
        Ok(tree)
    }

    /// Top-level items.
    pub fn items(&self) -> &[TocItem] {
        &self.items
    }

    /// True when the tree has no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All chapters in document order (depth first).
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        let mut stack: Vec<&TocItem> = self.items.iter().rev().collect();
        std::iter::from_fn(move || loop {
            let item = stack.pop()?;
            if let TocItem::Chapter(entry) = item {
                stack.extend(entry.children.iter().rev());
                return Some(entry);
            }
        })
    }

    /// Look up a chapter by its identity.
    pub fn find_by_path(&self, path: &str) -> Option<&NavigationEntry> {
        self.entries()
            .find(|entry| entry.path().is_some_and(|p| p.as_str() == path))
    }

    fn assign_depths(&mut self) {
        for item in &mut self.items {
            if let TocItem::Chapter(entry) = item {
                entry.assign_depth(0);
            }
        }
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
