//! View tree emitted by the Vitrine page renderer.
//!
//! A lightweight DOM-shaped tree in the mold of the
//! [DOM Living Standard](https://dom.spec.whatwg.org/): elements with
//! attributes and text leaves, held in an arena and addressed by
//! [`NodeId`] indices.
//!
//! # Design
//!
//! Arena allocation with index-based relationships gives O(1) access and
//! traversal without borrow checker issues. The renderer rebuilds the
//! whole tree on every content update rather than mutating it in place,
//! so the tree needs allocation and traversal but no removal surgery.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the view tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// Also serves as the stable identity key for rendered media elements:
/// the playback controller tracks videos by their node index, never by a
/// positional `section * width + project` computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single node in the view tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub kind: NodeKind,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent."
    pub parent: Option<NodeId>,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,
}

/// Node payloads.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The tree root (the page itself, not an element).
    Root,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
}

/// Element-specific data: local name plus attribute list.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The element's local name (`"div"`, `"video"`, ...).
    pub tag_name: String,
    /// The element's attribute list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Builder-style attribute setter, used by the renderer.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _previous = self.attrs.insert(name.into(), value.into());
        self
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the element's `class` attribute contains the given token.
    ///
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    /// "a set of space-separated tokens"
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split(' ').any(|token| token == class))
    }
}

/// Arena-based view tree with O(1) node access.
#[derive(Debug, Clone)]
pub struct ViewTree {
    /// All nodes, indexed by [`NodeId`]. The root is always at index 0.
    nodes: Vec<Node>,
}

impl ViewTree {
    /// Create a tree containing just the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty (it never is: the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate an element node. The node is not yet attached.
    pub fn alloc_element(&mut self, data: ElementData) -> NodeId {
        self.alloc(NodeKind::Element(data))
    }

    /// Allocate a text node. The node is not yet attached.
    pub fn alloc_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Iterate over all descendants of a node in document (pre-) order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// All descendant elements of `id` with the given tag name, in
    /// document order.
    #[must_use]
    pub fn find_all(&self, id: NodeId, tag_name: &str) -> Vec<NodeId> {
        self.descendants(id)
            .filter(|&n| {
                self.as_element(n)
                    .is_some_and(|e| e.tag_name == tag_name)
            })
            .collect()
    }

    /// Concatenated text of all descendant text nodes, in document order.
    ///
    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-textcontent)
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.as_text(id) {
            out.push_str(text);
        }
        for descendant in self.descendants(id) {
            if let Some(text) = self.as_text(descendant) {
                out.push_str(text);
            }
        }
        out
    }

    /// Indented, human-readable dump of the subtree rooted at `id`.
    ///
    /// Attributes are printed in sorted order so the output is stable.
    #[must_use]
    pub fn dump(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(id, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, indent: usize, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        let prefix = "  ".repeat(indent);
        match &node.kind {
            NodeKind::Root => out.push_str(&format!("{prefix}Root\n")),
            NodeKind::Element(data) => {
                if data.attrs.is_empty() {
                    out.push_str(&format!("{prefix}<{}>\n", data.tag_name));
                } else {
                    let mut attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    attrs.sort();
                    out.push_str(&format!(
                        "{prefix}<{} {}>\n",
                        data.tag_name,
                        attrs.join(" ")
                    ));
                }
            }
            NodeKind::Text(text) => {
                out.push_str(&format!("{prefix}\"{text}\"\n"));
            }
        }
        for &child in self.children(id) {
            self.dump_node(child, indent + 1, out);
        }
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    tree: &'a ViewTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
