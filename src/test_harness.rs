//! Shared fixtures for unit tests.
//!
//! Small builders for trees and locations so tests read as the sidebar they
//! describe rather than as constructor plumbing.

use crate::location::Location;
use crate::model::{NavigationEntry, NavigationTree, SectionNumber, TargetPath, TocItem};

pub fn path(raw: &str) -> TargetPath {
    TargetPath::new(raw).expect("test paths are non-empty")
}

/// Linked chapter; an empty `number` makes it an affix chapter.
pub fn chapter(label: &str, target: &str, number: &[u32]) -> NavigationEntry {
    let entry = NavigationEntry::new(label, path(target));
    if number.is_empty() {
        entry
    } else {
        entry.numbered(SectionNumber::new(number.to_vec()).expect("non-empty number"))
    }
}

pub fn location(url: &str) -> Location {
    Location::parse(url).expect("test locations are absolute")
}

/// `a.html`, then `b/index.html` with one child `b/c.html`.
pub fn two_page_tree() -> NavigationTree {
    NavigationTree::new(vec![
        chapter("A", "a.html", &[1]).into(),
        chapter("B", "b/index.html", &[2])
            .with_children(vec![chapter("C", "b/c.html", &[2, 1]).into()])
            .into(),
    ])
}

/// Three levels deep with an affix intro, a draft, a spacer and a part title.
pub fn guide_tree() -> NavigationTree {
    NavigationTree::new(vec![
        chapter("Introduction", "index.html", &[]).into(),
        chapter("Guide", "guide/index.html", &[1])
            .with_children(vec![
                chapter("Install", "guide/install.html", &[1, 1]).into(),
                chapter("Endpoints", "guide/endpoints/index.html", &[1, 2])
                    .with_children(vec![
                        chapter("Projects", "guide/endpoints/projects.html", &[1, 2, 1]).into(),
                        chapter("Symbology", "guide/endpoints/symbology.html", &[1, 2, 2]).into(),
                    ])
                    .into(),
                NavigationEntry::draft("Later")
                    .numbered(SectionNumber::new(vec![1, 3]).expect("non-empty"))
                    .into(),
            ])
            .into(),
        TocItem::Separator,
        TocItem::PartTitle {
            title: "Reference".to_string(),
        },
        chapter("API", "api.html", &[2]).into(),
        chapter("Links", "https://example.com/links.html", &[3]).into(),
    ])
}
