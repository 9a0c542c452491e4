//! sidebar-toc - Entry Point

use clap::Parser;
use sidebar_toc::config::ResolvedConfig;
use sidebar_toc::location::Location;
use sidebar_toc::model::{AppError, NavigationTree};
use sidebar_toc::state::{PageContext, SidebarController};
use sidebar_toc::storage::{MemoryStorage, SessionStorage};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Render a documentation sidebar for one page
#[derive(Parser, Debug)]
#[command(name = "sidebar-toc")]
#[command(version)]
#[command(about = "Render a documentation sidebar with the current page marked active")]
pub struct Args {
    /// Navigation tree produced by the documentation generator (.json or .toml)
    pub tree: PathBuf,

    /// Absolute URL of the page being displayed
    #[arg(short, long)]
    pub location: String,

    /// Prefix from the page back to the site root (e.g. "../")
    #[arg(short, long, default_value = "")]
    pub path_to_root: String,

    /// Scroll offset remembered from the previous page
    #[arg(long)]
    pub stored_scroll: Option<u32>,

    /// Collapse deep sections and emit toggles
    #[arg(long)]
    pub fold: bool,

    /// Depth below which sections start expanded when folding
    #[arg(long)]
    pub fold_level: Option<usize>,

    /// Document name a directory URL stands for
    #[arg(long)]
    pub default_document: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve configuration with the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = sidebar_toc::config::load_config_with_precedence(args.config.clone())?;
    let merged = sidebar_toc::config::merge_config(config_file);
    let with_env = sidebar_toc::config::apply_env_overrides(merged);

    // --fold only overrides when given; it cannot switch folding off
    let fold_override = args.fold.then_some(true);

    Ok(sidebar_toc::config::apply_cli_overrides(
        with_env,
        fold_override,
        args.fold_level,
        args.default_document.clone(),
    ))
}

/// Attach a sidebar for the requested page and return its HTML.
fn render(args: &Args, config: &ResolvedConfig) -> Result<String, AppError> {
    let tree = NavigationTree::load(&args.tree)?;
    let location = Location::parse(&args.location)?;
    let settings = config.sidebar_settings();

    let mut storage = MemoryStorage::new();
    if let Some(offset) = args.stored_scroll {
        storage.set(&settings.storage_key, &offset.to_string());
    }

    let mut sidebar = SidebarController::new(tree, settings, storage);
    let report = sidebar.attach(&PageContext::new(location, args.path_to_root.clone()));

    info!(
        active = report.active.is_some(),
        scroll = ?report.scroll,
        rewritten = report.rewritten_links,
        "Sidebar rendered"
    );

    Ok(sidebar.render_html())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    sidebar_toc::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let html = render(&args, &config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{html}").map_err(AppError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TREE_JSON: &str = r#"
{
  "items": [
    { "kind": "chapter", "label": "A", "path": "a.html", "number": [1] },
    { "kind": "chapter", "label": "B", "path": "b/index.html", "number": [2] }
  ]
}
"#;

    fn write_tree(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, TREE_JSON).expect("Failed to write test tree");
        path
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["sidebar-toc", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["sidebar-toc", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_location_is_required() {
        let result = Args::try_parse_from(["sidebar-toc", "book.json"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_minimal_args_defaults() {
        let args = Args::parse_from(["sidebar-toc", "book.json", "-l", "https://h/"]);
        assert_eq!(args.tree, PathBuf::from("book.json"));
        assert_eq!(args.location, "https://h/");
        assert_eq!(args.path_to_root, "");
        assert_eq!(args.stored_scroll, None);
        assert!(!args.fold);
        assert_eq!(args.fold_level, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "sidebar-toc",
            "book.toml",
            "--location",
            "https://h/b/",
            "--path-to-root",
            "../",
            "--stored-scroll",
            "140",
            "--fold",
            "--fold-level",
            "2",
            "--default-document",
            "home.html",
        ]);
        assert_eq!(args.path_to_root, "../");
        assert_eq!(args.stored_scroll, Some(140));
        assert!(args.fold);
        assert_eq!(args.fold_level, Some(2));
        assert_eq!(args.default_document, Some("home.html".to_string()));
    }

    #[test]
    fn test_stored_scroll_rejects_negative() {
        let result = Args::try_parse_from([
            "sidebar-toc",
            "book.json",
            "-l",
            "https://h/",
            "--stored-scroll",
            "-3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_marks_directory_page() {
        let tree = write_tree("sidebar_toc_main_render.json");
        let args = Args::parse_from([
            "sidebar-toc",
            tree.to_str().unwrap(),
            "-l",
            "https://h/b/",
            "-p",
            "../",
        ]);

        let html = render(&args, &ResolvedConfig::default()).expect("render succeeds");

        assert!(html.contains(r#"<a class="active" href="../b/index.html">"#));
        assert!(html.contains(r#"<a href="../a.html">"#));

        fs::remove_file(tree).ok();
    }

    #[test]
    fn test_render_rejects_relative_location() {
        let tree = write_tree("sidebar_toc_main_bad_location.json");
        let args = Args::parse_from(["sidebar-toc", tree.to_str().unwrap(), "-l", "b/index.html"]);

        let result = render(&args, &ResolvedConfig::default());
        assert!(matches!(result, Err(AppError::Location(_))));

        fs::remove_file(tree).ok();
    }

    #[test]
    fn test_render_reports_missing_tree() {
        let args = Args::parse_from([
            "sidebar-toc",
            "/nonexistent/sidebar-toc/book.json",
            "-l",
            "https://h/",
        ]);

        let result = render(&args, &ResolvedConfig::default());
        assert!(matches!(result, Err(AppError::Tree(_))));
    }
}
