//! Sidebar scroll memory across page loads.
//!
//! A click on a sidebar link stores the current offset; the next attach
//! consumes it. Values are stored the way a browser stringifies
//! `scrollTop`, so fractional offsets from a real browser are accepted too.

use crate::dom::{Dom, NodeId};
use crate::storage::SessionStorage;
use tracing::{debug, warn};

/// What attach did with the sidebar scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRestore {
    /// A remembered offset was applied.
    Restored(u32),
    /// No offset was remembered; the active link was scrolled to the centre.
    CenteredOnActive(NodeId),
    /// Nothing remembered and nothing active.
    Unchanged,
}

/// Store the sidebar offset under `key`.
pub fn remember_scroll(dom: &Dom, storage: &mut impl SessionStorage, key: &str) {
    let offset = dom.scroll_top();
    storage.set(key, &offset.to_string());
    debug!(offset, key, "Sidebar scroll remembered");
}

/// Consume the remembered offset and apply it, or centre the active link.
///
/// The key is always removed, whether or not its value was usable.
pub fn restore_scroll(
    dom: &mut Dom,
    storage: &mut impl SessionStorage,
    key: &str,
    active_link: Option<NodeId>,
) -> ScrollRestore {
    let remembered = storage.take(key).and_then(|raw| {
        let parsed = parse_offset(&raw);
        if parsed.is_none() {
            warn!(key, value = %raw, "Discarding unusable remembered scroll offset");
        }
        parsed
    });

    if let Some(offset) = remembered {
        dom.set_scroll_top(offset);
        return ScrollRestore::Restored(offset);
    }

    match active_link {
        Some(link) => {
            dom.request_scroll_into_view(link);
            ScrollRestore::CenteredOnActive(link)
        }
        None => ScrollRestore::Unchanged,
    }
}

/// Parse a stored offset. Negative values clamp to zero, fractions round.
fn parse_offset(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, SCROLL_KEY};

    fn dom_with_link() -> (Dom, NodeId) {
        let mut dom = Dom::new("sidebar");
        let link = dom.create_element(dom.root(), "a");
        (dom, link)
    }

    #[test]
    fn remember_writes_current_offset() {
        let (mut dom, _) = dom_with_link();
        dom.set_scroll_top(312);
        let mut storage = MemoryStorage::new();

        remember_scroll(&dom, &mut storage, SCROLL_KEY);

        assert_eq!(storage.get(SCROLL_KEY), Some("312".to_string()));
    }

    #[test]
    fn restore_applies_offset_and_removes_key() {
        let (mut dom, link) = dom_with_link();
        let mut storage = MemoryStorage::new();
        storage.set(SCROLL_KEY, "312");

        let outcome = restore_scroll(&mut dom, &mut storage, SCROLL_KEY, Some(link));

        assert_eq!(outcome, ScrollRestore::Restored(312));
        assert_eq!(dom.scroll_top(), 312);
        assert_eq!(dom.pending_scroll_into_view(), None);
        assert!(storage.is_empty(), "Key must be consumed");
    }

    #[test]
    fn restore_zero_is_a_real_offset() {
        let (mut dom, link) = dom_with_link();
        dom.set_scroll_top(50);
        let mut storage = MemoryStorage::new();
        storage.set(SCROLL_KEY, "0");

        let outcome = restore_scroll(&mut dom, &mut storage, SCROLL_KEY, Some(link));

        assert_eq!(outcome, ScrollRestore::Restored(0));
        assert_eq!(dom.scroll_top(), 0);
    }

    #[test]
    fn restore_without_key_centres_active_link() {
        let (mut dom, link) = dom_with_link();
        let mut storage = MemoryStorage::new();

        let outcome = restore_scroll(&mut dom, &mut storage, SCROLL_KEY, Some(link));

        assert_eq!(outcome, ScrollRestore::CenteredOnActive(link));
        assert_eq!(dom.pending_scroll_into_view(), Some(link));
    }

    #[test]
    fn restore_without_key_or_active_is_noop() {
        let (mut dom, _) = dom_with_link();
        dom.set_scroll_top(7);
        let mut storage = MemoryStorage::new();

        let outcome = restore_scroll(&mut dom, &mut storage, SCROLL_KEY, None);

        assert_eq!(outcome, ScrollRestore::Unchanged);
        assert_eq!(dom.scroll_top(), 7);
        assert_eq!(dom.pending_scroll_into_view(), None);
    }

    #[test]
    fn unusable_value_is_discarded_and_falls_back() {
        let (mut dom, link) = dom_with_link();
        let mut storage = MemoryStorage::new();
        storage.set(SCROLL_KEY, "not-a-number");

        let outcome = restore_scroll(&mut dom, &mut storage, SCROLL_KEY, Some(link));

        assert_eq!(outcome, ScrollRestore::CenteredOnActive(link));
        assert!(storage.is_empty(), "Key is removed even when unusable");
    }

    #[test]
    fn parse_offset_handles_browser_values() {
        assert_eq!(parse_offset("120"), Some(120));
        assert_eq!(parse_offset(" 120.6 "), Some(121));
        assert_eq!(parse_offset("-5"), Some(0));
        assert_eq!(parse_offset(""), None);
        assert_eq!(parse_offset("NaN"), None);
        assert_eq!(parse_offset("Infinity"), None);
    }
}
