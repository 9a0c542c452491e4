//! Sidebar state machine.
//!
//! All transitions operate on the in-memory element tree and are testable
//! without a browser.

pub mod active;
pub mod scroll_memory;
pub mod sidebar;
pub mod toggle_handler;

// Re-export for convenience
pub use active::{mark_active_links, ActivePath, LinkPass};
pub use scroll_memory::ScrollRestore;
pub use sidebar::{AttachReport, ClickOutcome, PageContext, SidebarController, SidebarSettings};
pub use toggle_handler::Toggled;
