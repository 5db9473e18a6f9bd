//! High-level tree verbs.
//!
//! [`DomExt`] resolves a reference point with the [`SiblingLocator`],
//! normalizes the content, and commits it with the [`InsertionEngine`].

use tendril::StrTendril;

use crate::content::Content;
use crate::error::{Error, Result};
use crate::insert::{InsertionEngine, InsertionTarget};
use crate::locator::SiblingLocator;
use crate::node::TreeNode;
use crate::normalize::Normalizer;
use crate::options::Options;

/// Entry point for all tree verbs, configured once with [`Options`].
///
/// # Example
///
/// ```rust
/// use rs_domext::dom::{self, first_node};
/// use rs_domext::DomExt;
///
/// let doc = dom::parse(r#"<ul id="list"><li>b</li></ul>"#);
/// let list = first_node(&doc, "#list").unwrap();
///
/// let ext = DomExt::default();
/// ext.prepend(&list, "<li>a</li>".into(), false);
/// ext.append(&list, "<li>c</li>".into(), false);
///
/// assert_eq!(ext.get_html(&list).as_ref(), "<li>a</li><li>b</li><li>c</li>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomExt {
    options: Options,
}

#[allow(clippy::unused_self)]
impl DomExt {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn locator(&self) -> SiblingLocator<'_> {
        SiblingLocator::new(&self.options)
    }

    fn insert<N: TreeNode>(
        &self,
        mut target: InsertionTarget<N>,
        content: Content<'_, N>,
        escape: bool,
    ) -> N {
        let fragments = Normalizer::new(&self.options).normalize_for(&mut target, content, escape);
        InsertionEngine::new().commit(&target, fragments)
    }

    // === Insertion ===

    /// Append `content` at the end of `container`.
    ///
    /// Returns `container`.
    pub fn append<N: TreeNode>(&self, container: &N, content: Content<'_, N>, escape: bool) -> N {
        self.insert(InsertionTarget::append(container.clone()), content, escape)
    }

    /// Insert `content` before the first element child of `container`, or
    /// append it when there is none.
    ///
    /// Returns `container`.
    pub fn prepend<N: TreeNode>(&self, container: &N, content: Content<'_, N>, escape: bool) -> N {
        let target = match self.locator().first(container, None) {
            Some(first) => InsertionTarget::before(container.clone(), first),
            None => InsertionTarget::append(container.clone()),
        };
        self.insert(target, content, escape)
    }

    /// Insert `content` before `ref_child`.
    ///
    /// When `ref_child` is not an element child of `container` the content
    /// is appended instead. Returns `container`.
    pub fn insert_before<N: TreeNode>(
        &self,
        container: &N,
        content: Content<'_, N>,
        ref_child: &N,
        escape: bool,
    ) -> N {
        let target = if ref_child.is_element_child_of(container) {
            InsertionTarget::before(container.clone(), ref_child.clone())
        } else {
            log::debug!("reference node is not a child of the container; appending");
            InsertionTarget::append(container.clone())
        };
        self.insert(target, content, escape)
    }

    /// Insert `content` after `ref_child`.
    ///
    /// When `ref_child` is not an element child of `container`, or is its
    /// last element child, the content is appended instead. Returns
    /// `container`.
    pub fn insert_after<N: TreeNode>(
        &self,
        container: &N,
        content: Content<'_, N>,
        ref_child: &N,
        escape: bool,
    ) -> N {
        let following = if ref_child.is_element_child_of(container) {
            self.locator().next(ref_child, None)
        } else {
            log::debug!("reference node is not a child of the container; appending");
            None
        };
        let target = match following {
            Some(reference) => InsertionTarget::before(container.clone(), reference),
            None => InsertionTarget::append(container.clone()),
        };
        self.insert(target, content, escape)
    }

    /// Replace `old` with `content`.
    ///
    /// `old` is replaced by the first fragment and any further fragments
    /// follow it in order. Without escaping the first fragment is returned;
    /// with escaping, or when `content` yields nothing, the parent of `old`
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] if `old` has no parent.
    pub fn replace<N: TreeNode>(
        &self,
        old: &N,
        content: Content<'_, N>,
        escape: bool,
    ) -> Result<N> {
        let parent = old.parent().ok_or(Error::Detached)?;
        let mut target = InsertionTarget::before(parent.clone(), old.clone());
        let fragments = Normalizer::new(&self.options).normalize_for(&mut target, content, escape);

        if target.reference.as_ref().is_none_or(|r| !r.same_node(old)) {
            // `old` was consumed from a live collection; its place is now
            // marked by whatever followed it.
            log::debug!("replaced node was part of the content; inserting at its position");
            let first = fragments.first().cloned();
            InsertionEngine::new().commit(&target, fragments);
            return Ok(match first {
                Some(first) if !escape => first,
                _ => parent,
            });
        }

        let mut fragments = fragments.into_iter();
        let Some(first) = fragments.next() else {
            parent.remove_child(old);
            return Ok(parent);
        };

        if !first.same_node(old) {
            parent.replace_child(&first, old);
        }

        // Each remaining fragment goes right after the one before it. A
        // fragment that already sits there is left alone.
        let mut previous = first.clone();
        for fragment in fragments {
            match previous.next_sibling() {
                Some(next) if next.same_node(&fragment) => {}
                Some(next) => parent.insert_child_before(&fragment, &next),
                None => parent.push_child(&fragment),
            }
            previous = fragment;
        }

        Ok(if escape { parent } else { first })
    }

    /// Detach `node` from its parent. No-op when already detached.
    pub fn remove<N: TreeNode>(&self, node: &N) {
        node.detach();
    }

    // === Sibling lookup ===

    /// First element child of `container`, optionally the first matching `selector`.
    #[must_use]
    pub fn first<N: TreeNode>(&self, container: &N, selector: Option<&str>) -> Option<N> {
        self.locator().first(container, selector)
    }

    /// Last element child of `container`, optionally the last matching `selector`.
    #[must_use]
    pub fn last<N: TreeNode>(&self, container: &N, selector: Option<&str>) -> Option<N> {
        self.locator().last(container, selector)
    }

    /// Next element sibling of `node`, optionally the nearest matching `selector`.
    #[must_use]
    pub fn next<N: TreeNode>(&self, node: &N, selector: Option<&str>) -> Option<N> {
        self.locator().next(node, selector)
    }

    /// Previous element sibling of `node`, optionally the nearest matching `selector`.
    #[must_use]
    pub fn prev<N: TreeNode>(&self, node: &N, selector: Option<&str>) -> Option<N> {
        self.locator().prev(node, selector)
    }

    // === Structural queries ===

    /// Whether `node` matches `selector`. A malformed selector matches nothing.
    #[must_use]
    pub fn test<N: TreeNode>(&self, node: &N, selector: &str) -> bool {
        self.locator()
            .compile::<N>(selector)
            .is_some_and(|compiled| node.matches(&compiled))
    }

    /// All descendants of `container` matching `selector`, in document order.
    ///
    /// A malformed selector yields an empty list.
    #[must_use]
    pub fn get_all<N: TreeNode>(&self, container: &N, selector: &str) -> Vec<N> {
        self.locator()
            .compile::<N>(selector)
            .map(|compiled| container.select_all(&compiled))
            .unwrap_or_default()
    }

    /// First descendant of `container` matching `selector`.
    #[must_use]
    pub fn get_element<N: TreeNode>(&self, container: &N, selector: &str) -> Option<N> {
        self.get_all(container, selector).into_iter().next()
    }

    // === Content accessors ===

    /// Inner markup of `node`.
    #[must_use]
    pub fn get_html<N: TreeNode>(&self, node: &N) -> StrTendril {
        node.inner_markup()
    }

    /// Replace the children of `node` with parsed `markup`. Returns `node`.
    pub fn set_html<N: TreeNode>(&self, node: &N, markup: &str) -> N {
        node.set_inner_markup(markup);
        node.clone()
    }

    /// Text content of `node` and its descendants.
    #[must_use]
    pub fn get_text<N: TreeNode>(&self, node: &N) -> StrTendril {
        node.text_content()
    }

    /// Replace the children of `node` with a single text node. Returns `node`.
    pub fn set_text<N: TreeNode>(&self, node: &N, text: &str) -> N {
        node.set_text_content(text);
        node.clone()
    }

    /// Uppercased element name of `node`.
    #[must_use]
    pub fn get_tag<N: TreeNode>(&self, node: &N) -> Option<String> {
        node.node_name()
    }

    /// Outer markup of `node`.
    #[must_use]
    pub fn serialize<N: TreeNode>(&self, node: &N) -> StrTendril {
        node.outer_markup()
    }
}
