//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod navigation;

// Re-export for convenience
pub use error::{AppError, TreeError};
pub use identifiers::{InvalidSectionNumber, InvalidTargetPath, SectionNumber, TargetPath};
pub use navigation::{NavigationEntry, NavigationTree, TocItem};
