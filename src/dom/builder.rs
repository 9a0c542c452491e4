//! Node-builder interface used by the renderer.
//!
//! The renderer describes structure as a stream of start/text/end calls and
//! never touches a concrete tree, so the same rendering can populate a
//! [`Dom`](super::Dom) or be written straight out as HTML.

use super::{Dom, NodeId};

/// Receiver for a depth-first element stream.
///
/// Calls must be balanced: every `start_element` is closed by exactly one
/// `end_element`.
pub trait NodeBuilder {
    /// Open an element. A `class` attribute carries space-separated tokens.
    fn start_element(&mut self, tag: &str, attrs: &[(&str, &str)]);

    /// Append a text node to the innermost open element.
    fn text(&mut self, content: &str);

    /// Close the innermost open element.
    fn end_element(&mut self);
}

/// Builds nodes into a [`Dom`] below a fixed parent.
pub struct TreeBuilder<'a> {
    dom: &'a mut Dom,
    stack: Vec<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new(dom: &'a mut Dom, parent: NodeId) -> Self {
        Self {
            dom,
            stack: vec![parent],
        }
    }

    fn current(&self) -> NodeId {
        // The base parent is never popped, see `end_element`.
        self.stack[self.stack.len() - 1]
    }
}

impl NodeBuilder for TreeBuilder<'_> {
    fn start_element(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        let id = self.dom.create_element(self.current(), tag);
        for (name, value) in attrs {
            self.dom.set_attribute(id, name, value);
        }
        self.stack.push(id);
    }

    fn text(&mut self, content: &str) {
        self.dom.create_text(self.current(), content);
    }

    fn end_element(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}
