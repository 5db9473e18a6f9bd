//! Sibling lookup by structural selector.
//!
//! All lookups walk element children and element siblings; text and comment
//! nodes are never returned. Without a selector each lookup is a single
//! structural step. With one, the walk stops at the first match.

use crate::node::TreeNode;
use crate::options::Options;

/// Finds first/last children and next/previous siblings.
#[derive(Debug, Clone, Copy)]
pub struct SiblingLocator<'o> {
    options: &'o Options,
}

impl<'o> SiblingLocator<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Compile `selector`, reporting a malformed one and returning `None`.
    pub fn compile<N: TreeNode>(&self, selector: &str) -> Option<N::Selector> {
        match N::compile_selector(selector) {
            Ok(compiled) => Some(compiled),
            Err(err) => {
                if self.options.warn_on_invalid_selector {
                    log::warn!("{err}; treating as no match");
                } else {
                    log::debug!("{err}; treating as no match");
                }
                None
            }
        }
    }

    /// First element child of `container`, or the first one matching `selector`.
    pub fn first<N: TreeNode>(&self, container: &N, selector: Option<&str>) -> Option<N> {
        let Some(selector) = selector else {
            return container.first_element_child();
        };
        let compiled = self.compile::<N>(selector)?;
        Self::scan(container.first_element_child(), &compiled, N::next_element_sibling)
    }

    /// Last element child of `container`, or the last one matching `selector`.
    pub fn last<N: TreeNode>(&self, container: &N, selector: Option<&str>) -> Option<N> {
        let Some(selector) = selector else {
            return container.last_element_child();
        };
        let compiled = self.compile::<N>(selector)?;
        Self::scan(container.last_element_child(), &compiled, N::prev_element_sibling)
    }

    /// Next element sibling of `from`, or the nearest following one matching `selector`.
    pub fn next<N: TreeNode>(&self, from: &N, selector: Option<&str>) -> Option<N> {
        let Some(selector) = selector else {
            return from.next_element_sibling();
        };
        let compiled = self.compile::<N>(selector)?;
        Self::scan(from.next_element_sibling(), &compiled, N::next_element_sibling)
    }

    /// Previous element sibling of `from`, or the nearest preceding one matching `selector`.
    pub fn prev<N: TreeNode>(&self, from: &N, selector: Option<&str>) -> Option<N> {
        let Some(selector) = selector else {
            return from.prev_element_sibling();
        };
        let compiled = self.compile::<N>(selector)?;
        Self::scan(from.prev_element_sibling(), &compiled, N::prev_element_sibling)
    }

    fn scan<N: TreeNode>(
        start: Option<N>,
        selector: &N::Selector,
        step: fn(&N) -> Option<N>,
    ) -> Option<N> {
        let mut current = start;
        while let Some(node) = current {
            if node.matches(selector) {
                return Some(node);
            }
            current = step(&node);
        }
        None
    }
}
