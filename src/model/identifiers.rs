//! Core identifier newtypes with smart constructors.
//!
//! Raw constructors are never exported - use smart constructors only.

use serde::Deserialize;
use std::fmt;

/// Relative path of a documentation page, as written by the generator
/// (e.g. `qsa-api/index.html`).
///
/// This is the identity of a [`NavigationEntry`](super::NavigationEntry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct TargetPath(String);

impl TargetPath {
    /// Smart constructor: validates non-empty path
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidTargetPath> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidTargetPath::Empty);
        }
        Ok(Self(raw))
    }

    /// The path as written in the tree.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TargetPath {
    type Error = InvalidTargetPath;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hierarchical chapter number such as `1.3.2`.
///
/// Displayed with a trailing dot after every component (`1.3.2.`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<u32>")]
pub struct SectionNumber(Vec<u32>);

impl SectionNumber {
    /// Smart constructor: at least one component is required
    pub fn new(parts: impl Into<Vec<u32>>) -> Result<Self, InvalidSectionNumber> {
        let parts = parts.into();
        if parts.is_empty() {
            return Err(InvalidSectionNumber::Empty);
        }
        Ok(Self(parts))
    }

    /// Components, outermost first.
    pub fn parts(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for SectionNumber {
    type Error = InvalidSectionNumber;

    fn try_from(parts: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.0 {
            write!(f, "{part}.")?;
        }
        Ok(())
    }
}

// ===== Error Types =====

/// Rejected [`TargetPath`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTargetPath {
    /// The path was an empty string.
    #[error("Target path cannot be empty")]
    Empty,
}

/// Rejected [`SectionNumber`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionNumber {
    /// No components were given.
    #[error("Section number needs at least one component")]
    Empty,
}

// ===== Tests =====
