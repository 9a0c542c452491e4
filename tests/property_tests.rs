//! Property-based tests for link rewriting and active marking.
//!
//! Tests validate:
//! 1. A directory URL and its default document mark the same link
//! 2. Relative hrefs gain exactly the root prefix; external ones never do
//! 3. At most one link is ever marked active

use proptest::prelude::*;
use sidebar_toc::location::{rewrite_href, Location};
use sidebar_toc::model::{NavigationEntry, NavigationTree, TargetPath, TocItem};
use sidebar_toc::state::{PageContext, SidebarController, SidebarSettings};
use sidebar_toc::storage::MemoryStorage;
use sidebar_toc::view::constants::ACTIVE_CLASS;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,7}"
}

fn directory() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..4)
}

/// One `<dir>/index.html` chapter per directory, plus a plain page.
fn tree_of(dirs: &[Vec<String>]) -> NavigationTree {
    let mut items: Vec<TocItem> =
        vec![NavigationEntry::new("Home", TargetPath::new("home.html").unwrap()).into()];
    for dir in dirs {
        let path = format!("{}/index.html", dir.join("/"));
        items.push(NavigationEntry::new(dir.join(" "), TargetPath::new(path).unwrap()).into());
    }
    NavigationTree::new(items)
}

fn attach(tree: NavigationTree, url: &str, path_to_root: &str) -> SidebarController<MemoryStorage> {
    let mut sidebar = SidebarController::new(tree, SidebarSettings::default(), MemoryStorage::new());
    let location = Location::parse(url).unwrap();
    sidebar.attach(&PageContext::new(location, path_to_root));
    sidebar
}

fn active_hrefs(sidebar: &SidebarController<MemoryStorage>) -> Vec<String> {
    sidebar
        .links()
        .into_iter()
        .filter(|link| sidebar.dom().has_class(*link, ACTIVE_CLASS))
        .filter_map(|link| sidebar.dom().attribute(link, "href").map(str::to_string))
        .collect()
}

// ===== Property 1: Directory equivalence =====

proptest! {
    #[test]
    fn directory_and_index_mark_same_link(dir in directory()) {
        let path_to_root = "../".repeat(dir.len());
        let joined = dir.join("/");

        let by_directory = attach(
            tree_of(std::slice::from_ref(&dir)),
            &format!("https://h/{joined}/"),
            &path_to_root,
        );
        let by_document = attach(
            tree_of(std::slice::from_ref(&dir)),
            &format!("https://h/{joined}/index.html"),
            &path_to_root,
        );

        let expected = vec![format!("{path_to_root}{joined}/index.html")];
        prop_assert_eq!(active_hrefs(&by_directory), expected.clone());
        prop_assert_eq!(active_hrefs(&by_document), expected);
    }
}

// ===== Property 2: Rewrite prefix =====

proptest! {
    #[test]
    fn relative_href_gets_prefix(
        dir in directory(),
        depth in 0usize..5,
    ) {
        let href = format!("{}.html", dir.join("/"));
        let prefix = "../".repeat(depth);

        prop_assert_eq!(rewrite_href(&href, &prefix), Some(format!("{prefix}{href}")));
    }

    #[test]
    fn external_and_fragment_hrefs_are_untouched(
        scheme in prop::sample::select(vec!["http:", "https:", "ftp:", "git+ssh:", ""]),
        host in segment(),
        depth in 0usize..5,
    ) {
        let prefix = "../".repeat(depth);
        let external = format!("{scheme}//{host}/page.html");
        let fragment = format!("#{host}");

        prop_assert_eq!(rewrite_href(&external, &prefix), None);
        prop_assert_eq!(rewrite_href(&fragment, &prefix), None);
    }
}

// ===== Property 3: Single active entry =====

proptest! {
    #[test]
    fn at_most_one_link_is_active(
        dirs in prop::collection::vec(directory(), 1..6),
        pick in any::<prop::sample::Index>(),
        duplicate in any::<bool>(),
    ) {
        let mut dirs = dirs;
        if duplicate {
            // Same target listed twice: still only one active link.
            let first = dirs[0].clone();
            dirs.push(first);
        }
        let visited = &dirs[pick.index(dirs.len())];
        let path_to_root = "../".repeat(visited.len());
        let url = format!("https://h/{}/index.html", visited.join("/"));

        let sidebar = attach(tree_of(&dirs), &url, &path_to_root);

        prop_assert_eq!(active_hrefs(&sidebar).len(), 1);
    }

    #[test]
    fn unknown_page_has_no_active_link(dirs in prop::collection::vec(directory(), 1..6)) {
        let sidebar = attach(tree_of(&dirs), "https://h/zz/missing.html", "../");

        prop_assert!(active_hrefs(&sidebar).is_empty());
    }
}
