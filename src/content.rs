//! Insertion arguments.
//!
//! Callers describe what to insert with [`Content`]. Whether a collection is
//! a stable snapshot or a live view is decided where the collection is built,
//! by choosing [`Content::Fixed`] or [`Content::Live`].

use std::borrow::Cow;
use std::fmt;

use crate::node::TreeNode;

/// A view over tree membership that is re-read on every access.
///
/// Detaching a member from its current parent removes it from the view and
/// shifts every later index down by one.
pub trait LiveCollection<N> {
    /// Current number of members.
    fn len(&self) -> usize;

    /// Member at `index`, reflecting the tree as it is now.
    fn item(&self, index: usize) -> Option<N>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every current member, in order, read in one pass.
    fn snapshot(&self) -> Vec<N> {
        (0..self.len()).filter_map(|i| self.item(i)).collect()
    }
}

/// Live view of a container's element children.
#[derive(Debug, Clone)]
pub struct LiveChildren<N> {
    container: N,
}

impl<N: TreeNode> LiveChildren<N> {
    /// View the element children of `container`.
    pub fn new(container: N) -> Self {
        Self { container }
    }
}

impl<N: TreeNode> LiveCollection<N> for LiveChildren<N> {
    fn len(&self) -> usize {
        self.container.element_children().len()
    }

    fn item(&self, index: usize) -> Option<N> {
        if index == 0 {
            return self.container.first_element_child();
        }
        self.container.element_children().into_iter().nth(index)
    }

    fn is_empty(&self) -> bool {
        self.container.first_element_child().is_none()
    }

    fn snapshot(&self) -> Vec<N> {
        self.container.element_children()
    }
}

/// Live view of the descendants of `root` matching a selector.
///
/// Members leave the view when they are moved out from under `root`.
pub struct LiveQuery<N: TreeNode> {
    root: N,
    selector: N::Selector,
}

impl<N: TreeNode> LiveQuery<N> {
    /// View the descendants of `root` matching `selector`, in document order.
    pub fn new(root: N, selector: N::Selector) -> Self {
        Self { root, selector }
    }
}

impl<N: TreeNode> LiveCollection<N> for LiveQuery<N> {
    fn len(&self) -> usize {
        self.root.select_all(&self.selector).len()
    }

    fn item(&self, index: usize) -> Option<N> {
        self.root.select_all(&self.selector).into_iter().nth(index)
    }

    fn snapshot(&self) -> Vec<N> {
        self.root.select_all(&self.selector)
    }
}

impl<N: TreeNode + fmt::Debug> fmt::Debug for LiveQuery<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveQuery")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Something to insert into a tree.
pub enum Content<'c, N> {
    /// A node, moved from wherever it currently lives.
    Node(N),
    /// Markup parsed into zero or more sibling nodes.
    Markup(Cow<'c, str>),
    /// A snapshot sequence, iterated with a stable cursor.
    Fixed(Vec<Content<'c, N>>),
    /// A live collection that shrinks as members are consumed.
    Live(&'c dyn LiveCollection<N>),
}

impl<'c, N> Content<'c, N> {
    /// A single node argument.
    pub fn node(node: N) -> Self {
        Self::Node(node)
    }

    /// A markup string, borrowed or owned.
    pub fn markup(markup: impl Into<Cow<'c, str>>) -> Self {
        Self::Markup(markup.into())
    }

    /// Snapshot of nodes, e.g. the result of collecting a query.
    pub fn nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        Self::Fixed(nodes.into_iter().map(Content::Node).collect())
    }

    /// A live collection, drained as it is inserted.
    pub fn live(collection: &'c dyn LiveCollection<N>) -> Self {
        Self::Live(collection)
    }
}

impl<'c, N> From<&'c str> for Content<'c, N> {
    fn from(markup: &'c str) -> Self {
        Self::Markup(Cow::Borrowed(markup))
    }
}

impl<N> From<String> for Content<'_, N> {
    fn from(markup: String) -> Self {
        Self::Markup(Cow::Owned(markup))
    }
}

impl<'c, N> From<Vec<Content<'c, N>>> for Content<'c, N> {
    fn from(items: Vec<Content<'c, N>>) -> Self {
        Self::Fixed(items)
    }
}
