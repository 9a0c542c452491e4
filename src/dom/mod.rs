//! In-memory element tree for the sidebar.
//!
//! An arena of nodes addressed by [`NodeId`]. The root node is the sidebar
//! element itself; everything rendered into it hangs below. The arena carries
//! the two bits of layout state the sidebar cares about: its vertical scroll
//! offset and a pending request to centre a node in view.

pub mod builder;
pub mod html;

pub use builder::{NodeBuilder, TreeBuilder};
pub use html::HtmlWriter;

/// Handle to a node in a [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An element: tag name, ordered attributes and a class list.
///
/// The `class` attribute is not stored with the other attributes; it is kept
/// as a token list so class operations never re-parse strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
}

impl Element {
    fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Lowercase tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Attributes other than `class`, in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Class tokens in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the class list contains `class_name`.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// Arena-backed element tree rooted at the sidebar element.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    scroll_top: u32,
    scroll_request: Option<NodeId>,
}

impl Dom {
    /// Create a tree holding only the root element.
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Element(Element::new(root_tag)),
            }],
            scroll_top: 0,
            scroll_request: None,
        }
    }

    /// The sidebar element itself.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes below the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when nothing has been rendered below the root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ===== Construction =====

    /// Append a new element as the last child of `parent`.
    pub fn create_element(&mut self, parent: NodeId, tag_name: &str) -> NodeId {
        self.push(parent, NodeKind::Element(Element::new(tag_name)))
    }

    /// Append a text node as the last child of `parent`.
    pub fn create_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Drop everything below the root.
    ///
    /// All previously issued ids other than the root become invalid. A pending
    /// scroll request is discarded with them; the scroll offset is kept.
    pub fn clear_children(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        self.scroll_request = None;
    }

    /// Start a [`TreeBuilder`] that appends below `parent`.
    pub fn builder(&mut self, parent: NodeId) -> TreeBuilder<'_> {
        TreeBuilder::new(self, parent)
    }

    // ===== Attributes and classes =====

    /// Set an attribute. Setting `class` replaces the class list.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(element) = self.element_mut(id) else {
            return;
        };
        if name == "class" {
            element.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match element.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element.attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Read a non-class attribute; use [`Dom::has_class`] for classes.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `id` is an element carrying `class_name`.
    pub fn has_class(&self, id: NodeId, class_name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class_name))
    }

    /// Add `class_name` unless already present.
    pub fn add_class(&mut self, id: NodeId, class_name: &str) {
        if let Some(element) = self.element_mut(id) {
            if !element.has_class(class_name) {
                element.classes.push(class_name.to_string());
            }
        }
    }

    /// Remove every occurrence of `class_name`.
    pub fn remove_class(&mut self, id: NodeId, class_name: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes.retain(|c| c != class_name);
        }
    }

    /// Flip a class, returning whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class_name: &str) -> bool {
        if self.has_class(id, class_name) {
            self.remove_class(id, class_name);
            false
        } else {
            self.add_class(id, class_name);
            self.has_class(id, class_name)
        }
    }

    // ===== Traversal =====

    /// The element at `id`, or `None` for text nodes and stale ids.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    /// Lowercase tag name of the element at `id`.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::tag_name)
    }

    /// Whether `id` names an element rather than text.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Content of the text node at `id`.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element(_) => None,
        }
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Parent only if it is an element (it always is in this tree, but the
    /// name mirrors what callers mean).
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|p| self.is_element(*p))
    }

    /// Child nodes in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Nearest preceding sibling that is an element, skipping text nodes.
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|s| *s == id)?;
        siblings[..position]
            .iter()
            .rev()
            .copied()
            .find(|s| self.is_element(*s))
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    /// Descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Descendant elements of `id` with the given tag, in document order.
    pub fn descendants_by_tag(&self, id: NodeId, tag_name: &str) -> Vec<NodeId> {
        let tag_name = tag_name.to_ascii_lowercase();
        self.descendants(id)
            .into_iter()
            .filter(|n| self.tag_name(*n) == Some(tag_name.as_str()))
            .collect()
    }

    /// Descendant elements of `id` carrying `class_name`, optionally
    /// restricted to a tag (`a.toggle` is `select_class(root, Some("a"), "toggle")`).
    pub fn select_class(&self, id: NodeId, tag_name: Option<&str>, class_name: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|n| {
                self.element(*n).is_some_and(|e| {
                    e.has_class(class_name) && tag_name.is_none_or(|t| e.tag_name() == t)
                })
            })
            .collect()
    }

    /// Concatenated text below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.text(n))
            .collect()
    }

    // ===== Scrolling =====

    /// Vertical scroll offset of the sidebar.
    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Set the sidebar scroll offset. Clears any pending centring request.
    pub fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset;
        self.scroll_request = None;
    }

    /// Ask for `node` to be scrolled to the vertical centre of the sidebar.
    pub fn request_scroll_into_view(&mut self, node: NodeId) {
        self.scroll_request = Some(node);
    }

    /// Node waiting to be centred, if any.
    pub fn pending_scroll_into_view(&self) -> Option<NodeId> {
        self.scroll_request
    }

    // ===== Serialization =====

    /// Serialize the children of `id` to HTML.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut writer = HtmlWriter::new();
        for child in self.children(id) {
            self.replay(*child, &mut writer);
        }
        writer.finish()
    }

    /// Drive any [`NodeBuilder`] with the subtree at `id`.
    ///
    /// A stale id replays nothing.
    pub fn replay(&self, id: NodeId, builder: &mut impl NodeBuilder) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => builder.text(text),
            NodeKind::Element(element) => {
                let class_value = element.classes.join(" ");
                let mut attrs: Vec<(&str, &str)> = Vec::with_capacity(element.attrs.len() + 1);
                if !class_value.is_empty() {
                    attrs.push(("class", class_value.as_str()));
                }
                attrs.extend(element.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str())));
                builder.start_element(&element.tag_name, &attrs);
                for child in &node.children {
                    self.replay(*child, builder);
                }
                builder.end_element();
            }
        }
    }
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
