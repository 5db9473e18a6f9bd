//! DOM host adapter
//!
//! Implements [`TreeNode`] for `dom_query`'s node handle so every verb in the
//! crate works directly on `dom_query` documents.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::node::{PayloadKind, TreeNode};

/// Tag of the throwaway holder used while parsing fragments.
const FRAGMENT_HOLDER: &str = "div";

impl<'a> TreeNode for NodeRef<'a> {
    type Selector = Matcher;

    fn compile_selector(source: &str) -> Result<Matcher> {
        Matcher::new(source).map_err(|_| Error::InvalidSelector(source.to_string()))
    }

    fn matches(&self, selector: &Matcher) -> bool {
        NodeRef::is_match(self, selector)
    }

    fn select_all(&self, selector: &Matcher) -> Vec<Self> {
        Selection::from(*self).select_matcher(selector).nodes().to_vec()
    }

    fn kind(&self) -> PayloadKind {
        if NodeRef::is_element(self) {
            PayloadKind::Element
        } else if NodeRef::is_text(self) {
            PayloadKind::Text
        } else {
            PayloadKind::Other
        }
    }

    fn is_container(&self) -> bool {
        NodeRef::is_element(self) || NodeRef::is_document(self)
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn first_child(&self) -> Option<Self> {
        NodeRef::first_child(self)
    }

    fn last_child(&self) -> Option<Self> {
        NodeRef::last_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        NodeRef::next_sibling(self)
    }

    fn prev_sibling(&self) -> Option<Self> {
        NodeRef::prev_sibling(self)
    }

    fn push_child(&self, child: &Self) {
        child.remove_from_parent();
        NodeRef::append_child(self, &child.id);
    }

    fn insert_child_before(&self, child: &Self, reference: &Self) {
        if child.same_node(reference) {
            return;
        }
        child.remove_from_parent();
        reference.insert_before(&child.id);
    }

    fn remove_child(&self, child: &Self) {
        if NodeRef::parent(child).is_some_and(|p| p.same_node(self)) {
            child.remove_from_parent();
        }
    }

    fn parse_fragment(&self, markup: &str) -> Vec<Self> {
        let holder = self.tree.new_element(FRAGMENT_HOLDER);
        holder.set_html(markup);
        let nodes = holder.children();
        for node in &nodes {
            node.remove_from_parent();
        }
        nodes
    }

    fn outer_markup(&self) -> StrTendril {
        NodeRef::html(self)
    }

    fn inner_markup(&self) -> StrTendril {
        NodeRef::inner_html(self)
    }

    fn set_inner_markup(&self, markup: &str) {
        NodeRef::set_html(self, markup);
    }

    fn text_content(&self) -> StrTendril {
        NodeRef::text(self)
    }

    fn set_text_content(&self, text: &str) {
        NodeRef::set_text(self, text);
    }

    fn node_name(&self) -> Option<String> {
        if !NodeRef::is_element(self) {
            return None;
        }
        NodeRef::node_name(self).map(|name| name.to_uppercase())
    }
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First node in `doc` matching `selector`.
#[must_use]
pub fn first_node<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}
