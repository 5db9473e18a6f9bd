//! Insertion engine.
//!
//! Commits normalized fragments to a container, one primitive mutation per
//! fragment.

use crate::node::TreeNode;

/// Where fragments land: before `reference`, or at the end of `container`.
#[derive(Debug, Clone)]
pub struct InsertionTarget<N> {
    pub container: N,
    pub reference: Option<N>,
}

impl<N: TreeNode> InsertionTarget<N> {
    /// Append at the end of `container`.
    pub fn append(container: N) -> Self {
        Self {
            container,
            reference: None,
        }
    }

    /// Insert before `reference`, which must be a child of `container`.
    pub fn before(container: N, reference: N) -> Self {
        Self {
            container,
            reference: Some(reference),
        }
    }
}

/// Applies fragments to an [`InsertionTarget`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionEngine;

impl InsertionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Attach every fragment to the target, in order.
    ///
    /// Each fragment is attached individually, so fragments still land in
    /// order when earlier ones shift sibling indices. Fragments may still be
    /// attached elsewhere; attaching moves them. A fragment that is the
    /// reference node itself stays where it is, and later fragments follow
    /// it.
    ///
    /// Returns the target container.
    pub fn commit<N: TreeNode>(&self, target: &InsertionTarget<N>, fragments: Vec<N>) -> N {
        let container = &target.container;
        let mut reference = target.reference.clone();
        for fragment in fragments {
            match &reference {
                Some(current) if current.same_node(&fragment) => {
                    log::trace!("fragment is the reference; keeping it in place");
                    reference = fragment.next_sibling();
                }
                Some(current) => {
                    log::trace!("insert fragment before reference");
                    container.insert_child_before(&fragment, current);
                }
                None => {
                    log::trace!("append fragment");
                    container.push_child(&fragment);
                }
            }
        }
        container.clone()
    }
}
