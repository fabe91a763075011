//! Node types: NodeId, NodeKind, NodeData.

use std::fmt;

use slotmap::new_key_type;

use crate::route::ScreenFactory;
use crate::screen::{Screen, ScreenDescriptor};

new_key_type! {
    /// Unique identifier for a hierarchy node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Prefix of routes generated for nodes declared without one.
pub const DEFAULT_ROUTE_PREFIX: &str = "D_FAULT_";

/// Prefix of routes for wrapper nodes the tree creates on its own.
pub const IMPLICIT_ROUTE_PREFIX: &str = "IMPL_";

/// The three fixed levels of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Item,
    Section,
    Content,
}

impl NodeKind {
    /// Type name used when deriving default routes.
    pub fn type_name(self) -> &'static str {
        match self {
            NodeKind::Item => "ShellItem",
            NodeKind::Section => "ShellSection",
            NodeKind::Content => "ShellContent",
        }
    }

    /// The kind of this level's children, if any.
    pub fn child_kind(self) -> Option<NodeKind> {
        match self {
            NodeKind::Item => Some(NodeKind::Section),
            NodeKind::Section => Some(NodeKind::Content),
            NodeKind::Content => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            NodeKind::Item => 0,
            NodeKind::Section => 1,
            NodeKind::Content => 2,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Item => "item",
            NodeKind::Section => "section",
            NodeKind::Content => "content",
        })
    }
}

/// Data associated with a single hierarchy node.
#[derive(Clone)]
pub struct NodeData {
    /// Level in the hierarchy.
    pub kind: NodeKind,
    /// Route, unique across the tree.
    pub route: String,
    /// Optional display title.
    pub title: Option<String>,
    /// Wrapper created by the tree; left out of the location.
    pub implicit: bool,
    /// Content only: factory for the section stack's root screen.
    pub(crate) root: Option<ScreenFactory>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, route: String) -> Self {
        Self {
            kind,
            route,
            title: None,
            implicit: false,
            root: None,
        }
    }

    /// Instantiate the root screen for a content node.
    ///
    /// Contents declared without a root factory get a navigation-capable
    /// `ContentPage`.
    pub fn root_screen(&self) -> Screen {
        let descriptor = match &self.root {
            Some(factory) => factory(),
            None => ScreenDescriptor::new("ContentPage"),
        };
        Screen::new(self.route.clone(), descriptor)
    }
}

impl fmt::Debug for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeData")
            .field("kind", &self.kind)
            .field("route", &self.route)
            .field("title", &self.title)
            .field("implicit", &self.implicit)
            .field("root", &self.root.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
