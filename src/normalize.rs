//! Content normalization.
//!
//! Turns a [`Content`] argument into the ordered list of fragments the
//! insertion engine commits, escaping textual payloads on request.

use crate::content::{Content, LiveCollection};
use crate::escape::escape_html;
use crate::insert::InsertionTarget;
use crate::node::TreeNode;
use crate::options::Options;

/// Converts insertion arguments into fragments.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'o> {
    options: &'o Options,
}

impl<'o> Normalizer<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Normalize `content` into fragments owned by the tree of `context`.
    ///
    /// The result holds one entry per leaf content unit: every top-level node
    /// parsed from markup, every node argument, and the members of fixed and
    /// live sequences in order. Markup is parsed as permissively as the host
    /// parser allows and never fails.
    ///
    /// With `escape` set, markup and the serialized markup of node arguments
    /// are HTML-escaped before parsing, so they only ever yield text.
    ///
    /// Members of a live collection are detached as they are read, which
    /// empties the collection.
    pub fn normalize<N: TreeNode>(
        &self,
        context: &N,
        content: Content<'_, N>,
        escape: bool,
    ) -> Vec<N> {
        let mut fragments = Vec::new();
        self.normalize_into(context, content, escape, &mut None, &mut fragments);
        fragments
    }

    /// Normalize `content` for insertion at `target`.
    ///
    /// Same as [`normalize`](Self::normalize), except that when a live
    /// member being consumed is the target's reference node, the reference
    /// moves on to the member's next sibling. The target then still names a
    /// position inside its container once the drain is done.
    pub fn normalize_for<N: TreeNode>(
        &self,
        target: &mut InsertionTarget<N>,
        content: Content<'_, N>,
        escape: bool,
    ) -> Vec<N> {
        let mut fragments = Vec::new();
        let context = target.container.clone();
        self.normalize_into(&context, content, escape, &mut target.reference, &mut fragments);
        fragments
    }

    fn normalize_into<N: TreeNode>(
        &self,
        context: &N,
        content: Content<'_, N>,
        escape: bool,
        anchor: &mut Option<N>,
        out: &mut Vec<N>,
    ) {
        match content {
            Content::Markup(markup) => out.extend(self.markup_fragments(context, &markup, escape)),
            Content::Node(node) => self.node_fragments(context, node, escape, out),
            Content::Fixed(items) => {
                for item in items {
                    self.normalize_into(context, item, escape, anchor, out);
                }
            }
            Content::Live(collection) => self.drain_live(context, collection, escape, anchor, out),
        }
    }

    fn markup_fragments<N: TreeNode>(&self, context: &N, markup: &str, escape: bool) -> Vec<N> {
        if escape {
            context.parse_fragment(&escape_html(markup, self.options.escape_mode))
        } else {
            context.parse_fragment(markup)
        }
    }

    fn node_fragments<N: TreeNode>(&self, context: &N, node: N, escape: bool, out: &mut Vec<N>) {
        if escape {
            let markup = node.outer_markup();
            out.extend(self.markup_fragments(context, &markup, true));
        } else {
            out.push(node);
        }
    }

    fn drain_live<N: TreeNode>(
        &self,
        context: &N,
        collection: &dyn LiveCollection<N>,
        escape: bool,
        anchor: &mut Option<N>,
        out: &mut Vec<N>,
    ) {
        if escape {
            // Escaping serializes members without moving them, so the
            // collection keeps its size and can be snapshotted.
            for member in collection.snapshot() {
                self.node_fragments(context, member, true, out);
            }
            return;
        }

        let initial_len = collection.len();
        log::debug!("draining live collection of {initial_len} members");
        let mut previous: Option<N> = None;
        for _ in 0..initial_len {
            let Some(head) = collection.item(0) else {
                break;
            };
            if previous.as_ref().is_some_and(|p| p.same_node(&head)) {
                log::warn!("live collection did not shrink after consuming a member; stopping");
                break;
            }
            if anchor.as_ref().is_some_and(|a| a.same_node(&head)) {
                log::debug!("live collection contains the insertion reference; re-anchoring");
                *anchor = head.next_sibling();
            }
            head.detach();
            out.push(head.clone());
            previous = Some(head);
        }
    }
}
