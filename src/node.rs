//! The node capability set every tree operation is written against.
//!
//! A host tree model plugs into this crate by implementing [`TreeNode`] for
//! its node handle. The crate ships an implementation for
//! [`dom_query::NodeRef`] in [`crate::dom`].

use tendril::StrTendril;

use crate::error::Result;

/// Payload carried by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// A tagged element.
    Element,
    /// A text run.
    Text,
    /// Anything else the host tree knows about (comments, doctype, document).
    Other,
}

/// Handle to a node in a host tree.
///
/// Handles are cheap to clone and compare by identity through
/// [`same_node`](TreeNode::same_node). Mutations go through `&self`: the host
/// tree is expected to use interior mutability, as `dom_query` does.
///
/// Attaching a node that already has a parent must move it, detaching it
/// from the old parent first.
pub trait TreeNode: Clone {
    /// Compiled form of a structural selector.
    type Selector;

    /// Compile a selector string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`](crate::Error::InvalidSelector) when
    /// the host cannot parse `source`.
    fn compile_selector(source: &str) -> Result<Self::Selector>;

    /// Whether this node matches `selector`.
    fn matches(&self, selector: &Self::Selector) -> bool;

    /// All descendants matching `selector`, in document order.
    fn select_all(&self, selector: &Self::Selector) -> Vec<Self>;

    fn kind(&self) -> PayloadKind;

    /// Whether this node can hold children.
    fn is_container(&self) -> bool;

    /// Identity comparison.
    fn same_node(&self, other: &Self) -> bool;

    fn parent(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;
    fn last_child(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
    fn prev_sibling(&self) -> Option<Self>;

    /// Append `child` as the last child of `self`.
    fn push_child(&self, child: &Self);

    /// Insert `child` immediately before `reference`, a child of `self`.
    fn insert_child_before(&self, child: &Self, reference: &Self);

    /// Detach `child` from `self`. No-op if `child` is not a child of `self`.
    fn remove_child(&self, child: &Self);

    /// Parse `markup` in the tree that owns `self`.
    ///
    /// Returns the top-level parsed nodes in order, detached. No wrapper
    /// node is retained. Malformed markup is handled as permissively as the
    /// host parser handles it.
    fn parse_fragment(&self, markup: &str) -> Vec<Self>;

    /// Serialized markup of the node including itself.
    fn outer_markup(&self) -> StrTendril;

    /// Serialized markup of the node's children.
    fn inner_markup(&self) -> StrTendril;

    /// Replace all children with the parsed `markup`.
    fn set_inner_markup(&self, markup: &str);

    /// Concatenated text of the node and its descendants.
    fn text_content(&self) -> StrTendril;

    /// Replace all children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Uppercased element name, `None` for non-elements.
    fn node_name(&self) -> Option<String>;

    fn is_element(&self) -> bool {
        self.kind() == PayloadKind::Element
    }

    /// Replace `old`, a child of `self`, with `replacement`.
    fn replace_child(&self, replacement: &Self, old: &Self) {
        self.insert_child_before(replacement, old);
        self.remove_child(old);
    }

    /// Detach this node from its parent, if any.
    fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(self);
        }
    }

    /// Element children, in order.
    fn element_children(&self) -> Vec<Self> {
        let mut children = Vec::new();
        let mut child = self.first_element_child();
        while let Some(c) = child {
            child = c.next_element_sibling();
            children.push(c);
        }
        children
    }

    fn first_element_child(&self) -> Option<Self> {
        let first = self.first_child()?;
        if first.is_element() {
            Some(first)
        } else {
            first.next_element_sibling()
        }
    }

    fn last_element_child(&self) -> Option<Self> {
        let last = self.last_child()?;
        if last.is_element() {
            Some(last)
        } else {
            last.prev_element_sibling()
        }
    }

    /// Next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self) -> Option<Self> {
        let mut sibling = self.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(s);
            }
            sibling = s.next_sibling();
        }
        None
    }

    /// Previous sibling that is an element, skipping text and comments.
    fn prev_element_sibling(&self) -> Option<Self> {
        let mut sibling = self.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(s);
            }
            sibling = s.prev_sibling();
        }
        None
    }

    /// Whether `self` is an element child of `container`.
    fn is_element_child_of(&self, container: &Self) -> bool {
        self.is_element() && self.parent().is_some_and(|p| p.same_node(container))
    }
}
