//! # rs-domext
//!
//! Content insertion and sibling traversal helpers over an HTML document tree.
//!
//! Insert nodes, markup, snapshots or live collections at any position of a
//! container, optionally escaped so markup lands as inert text, and walk
//! siblings by CSS selector.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_domext::dom::{self, first_node};
//! use rs_domext::{Content, DomExt, LiveChildren};
//!
//! let doc = dom::parse(r#"<ul id="todo"><li>a</li></ul><ul id="done"><li>b</li><li>c</li></ul>"#);
//! let todo = first_node(&doc, "#todo").unwrap();
//! let done = first_node(&doc, "#done").unwrap();
//! let ext = DomExt::default();
//!
//! // Markup, escaped: lands as text.
//! ext.append(&todo, "<li>x</li>".into(), true);
//!
//! // Live collection: every child of `done` moves, in order.
//! let moving = LiveChildren::new(done);
//! ext.append(&todo, Content::live(&moving), false);
//!
//! assert_eq!(
//!     ext.get_html(&todo).as_ref(),
//!     "<li>a</li>&lt;li&gt;x&lt;/li&gt;<li>b</li><li>c</li>"
//! );
//! assert!(ext.first(&done, None).is_none());
//! ```
//!
//! ## Features
//!
//! - **Heterogeneous content**: nodes, markup, fixed sequences, live collections
//! - **Escaping**: opt-in per call, turns any content into literal text
//! - **Sibling lookup**: first/last/next/prev with short-circuiting selector search
//! - **Pluggable tree**: everything is written against the [`TreeNode`] trait;
//!   [`dom_query`] documents work out of the box

mod error;
mod escape;
mod options;
mod verbs;

/// `dom_query` host adapter.
pub mod dom;

/// Node capability trait.
pub mod node;

/// Insertion arguments and live collections.
pub mod content;

/// Content normalization.
pub mod normalize;

/// Insertion engine.
pub mod insert;

/// Sibling lookup.
pub mod locator;

// Public API - re-exports
pub use content::{Content, LiveChildren, LiveCollection, LiveQuery};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use insert::{InsertionEngine, InsertionTarget};
pub use locator::SiblingLocator;
pub use node::{PayloadKind, TreeNode};
pub use normalize::Normalizer;
pub use options::{EscapeMode, Options};
pub use verbs::DomExt;
