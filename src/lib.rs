//! Documentation sidebar (sidebar-toc)
//!
//! Renders a static table-of-contents tree into a sidebar element, marks the
//! entry for the current page, and remembers the sidebar scroll position
//! across navigations.
//!
//! The browser pieces are explicit: the element tree lives in [`dom`],
//! session storage is the [`storage::SessionStorage`] trait, and the current
//! location is passed in as a [`location::Location`].

pub mod config;
pub mod dom;
pub mod location;
pub mod logging;
pub mod model;
pub mod state;
pub mod storage;
pub mod view;

#[cfg(test)]
mod test_harness;
