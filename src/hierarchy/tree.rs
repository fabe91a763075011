//! The shell hierarchy: an arena of Item → Section → Content nodes plus the
//! per-section navigation state and the current selection.

use std::collections::{HashMap, HashSet};

use slotmap::{SecondaryMap, SlotMap};

use super::builder::{ShellContent, ShellItem, ShellSection};
use super::current::{CurrentPath, DefaultSelection, HierarchySwitch};
use super::node::{NodeData, NodeId, NodeKind, DEFAULT_ROUTE_PREFIX, IMPLICIT_ROUTE_PREFIX};
use crate::error::NavigationError;
use crate::navigation::SectionNavigation;
use crate::route::registry::validate_route_name;
use crate::route::ScreenFactory;
use crate::screen::Screen;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

// ---------------------------------------------------------------------------
// PendingNodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum PendingParent {
    Root,
    Existing(NodeId),
    Pending(usize),
}

#[derive(Debug)]
struct PendingNode {
    parent: PendingParent,
    data: NodeData,
}

/// Nodes validated against the tree but not yet inserted.
///
/// Produced by the `plan_*` methods and applied with [`ShellTree::commit`].
/// Every route has been checked for syntax and tree-wide uniqueness.
#[derive(Debug)]
pub struct PendingNodes {
    nodes: Vec<PendingNode>,
    primary: usize,
    counters: [usize; 3],
}

impl PendingNodes {
    /// Routes of every node that will be inserted, wrappers included.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.data.route.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builds a [`PendingNodes`] batch, allocating default routes as it goes.
struct Planner<'a> {
    tree: &'a ShellTree,
    counters: [usize; 3],
    nodes: Vec<PendingNode>,
    seen: HashSet<String>,
}

impl<'a> Planner<'a> {
    fn new(tree: &'a ShellTree) -> Self {
        Self {
            tree,
            counters: tree.counters,
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Resolve a node's route: the declared one, or the next default for `kind`.
    fn route(&mut self, kind: NodeKind, declared: Option<String>) -> Result<String, NavigationError> {
        let n = self.counters[kind.index()];
        self.counters[kind.index()] += 1;
        let route = match declared {
            Some(route) => {
                validate_route_name(&route)?;
                route
            }
            None => format!("{DEFAULT_ROUTE_PREFIX}{}{n}", kind.type_name()),
        };
        self.claim(route)
    }

    /// Route for a wrapper created around `child_route`.
    fn implicit_route(&mut self, kind: NodeKind, child_route: &str) -> Result<String, NavigationError> {
        self.counters[kind.index()] += 1;
        self.claim(format!("{IMPLICIT_ROUTE_PREFIX}{child_route}"))
    }

    fn claim(&mut self, route: String) -> Result<String, NavigationError> {
        if self.tree.routes.contains_key(&route) || !self.seen.insert(route.clone()) {
            return Err(NavigationError::RouteConflict {
                route,
                scope: "shell hierarchy",
            });
        }
        Ok(route)
    }

    fn push(&mut self, parent: PendingParent, data: NodeData) -> usize {
        self.nodes.push(PendingNode { parent, data });
        self.nodes.len() - 1
    }

    fn node(
        kind: NodeKind,
        route: String,
        title: Option<String>,
        implicit: bool,
        root: Option<ScreenFactory>,
    ) -> NodeData {
        let mut data = NodeData::new(kind, route);
        data.title = title;
        data.implicit = implicit;
        data.root = root;
        data
    }

    fn plan_contents(&mut self, parent: usize, contents: Vec<ShellContent>) -> Result<(), NavigationError> {
        for content in contents {
            let route = self.route(NodeKind::Content, content.route)?;
            let data = Self::node(NodeKind::Content, route, content.title, false, content.root);
            self.push(PendingParent::Pending(parent), data);
        }
        Ok(())
    }

    fn plan_section_body(
        &mut self,
        parent: PendingParent,
        route: String,
        section: ShellSection,
    ) -> Result<usize, NavigationError> {
        if section.contents.is_empty() {
            return Err(NavigationError::InvalidHierarchy {
                reason: format!("section `{route}` has no content"),
            });
        }
        let data = Self::node(NodeKind::Section, route, section.title, false, None);
        let index = self.push(parent, data);
        self.plan_contents(index, section.contents)?;
        Ok(index)
    }

    fn finish(self, primary: usize) -> PendingNodes {
        PendingNodes {
            nodes: self.nodes,
            primary,
            counters: self.counters,
        }
    }
}

// ---------------------------------------------------------------------------
// ShellTree
// ---------------------------------------------------------------------------

/// The hierarchy of a shell, backed by a slotmap arena.
///
/// Nodes never move or disappear once inserted. Each section owns a
/// [`SectionNavigation`] stored in a secondary map keyed by the section id.
#[derive(Debug, Clone, Default)]
pub struct ShellTree {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    items: Vec<NodeId>,
    routes: HashMap<String, NodeId>,
    sections: SecondaryMap<NodeId, SectionNavigation>,
    /// Last selected child of each item and section.
    selected: SecondaryMap<NodeId, NodeId>,
    current: Option<CurrentPath>,
    counters: [usize; 3],
}

impl ShellTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Planning ─────────────────────────────────────────────────────

    /// Validate a complete item.
    pub fn plan_item(&self, item: ShellItem) -> Result<PendingNodes, NavigationError> {
        let mut planner = Planner::new(self);
        let route = planner.route(NodeKind::Item, item.route)?;
        if item.sections.is_empty() {
            return Err(NavigationError::InvalidHierarchy {
                reason: format!("item `{route}` has no section"),
            });
        }
        let data = Planner::node(NodeKind::Item, route, item.title, false, None);
        let index = planner.push(PendingParent::Root, data);
        for section in item.sections {
            let route = planner.route(NodeKind::Section, section.route.clone())?;
            planner.plan_section_body(PendingParent::Pending(index), route, section)?;
        }
        Ok(planner.finish(index))
    }

    /// Validate a section, either under an existing item or wrapped in an
    /// implicit item of its own.
    pub fn plan_section(
        &self,
        item: Option<NodeId>,
        section: ShellSection,
    ) -> Result<PendingNodes, NavigationError> {
        let mut planner = Planner::new(self);
        let route = planner.route(NodeKind::Section, section.route.clone())?;
        let parent = match item {
            Some(item) => {
                self.expect_kind(item, NodeKind::Item)?;
                PendingParent::Existing(item)
            }
            None => {
                let wrapper = planner.implicit_route(NodeKind::Item, &route)?;
                let data = Planner::node(NodeKind::Item, wrapper, None, true, None);
                PendingParent::Pending(planner.push(PendingParent::Root, data))
            }
        };
        let index = planner.plan_section_body(parent, route, section)?;
        Ok(planner.finish(index))
    }

    /// Validate a content, either under an existing section or wrapped in an
    /// implicit item and section.
    pub fn plan_content(
        &self,
        section: Option<NodeId>,
        content: ShellContent,
    ) -> Result<PendingNodes, NavigationError> {
        let mut planner = Planner::new(self);
        let route = planner.route(NodeKind::Content, content.route.clone())?;
        let parent = match section {
            Some(section) => {
                self.expect_kind(section, NodeKind::Section)?;
                PendingParent::Existing(section)
            }
            None => {
                let section_route = planner.implicit_route(NodeKind::Section, &route)?;
                let item_route = planner.implicit_route(NodeKind::Item, &section_route)?;
                let item = Planner::node(NodeKind::Item, item_route, None, true, None);
                let item = planner.push(PendingParent::Root, item);
                let section = Planner::node(NodeKind::Section, section_route, None, true, None);
                PendingParent::Pending(planner.push(PendingParent::Pending(item), section))
            }
        };
        let data = Planner::node(NodeKind::Content, route, content.title, false, content.root);
        let index = planner.push(parent, data);
        Ok(planner.finish(index))
    }

    /// Insert a validated batch. Returns the id of the declared node.
    ///
    /// The first item ever added becomes current, with its section's stack
    /// rooted at the default content.
    pub fn commit(&mut self, pending: PendingNodes) -> NodeId {
        let mut ids: Vec<NodeId> = Vec::with_capacity(pending.nodes.len());
        for node in pending.nodes {
            let parent = match node.parent {
                PendingParent::Root => None,
                PendingParent::Existing(id) => Some(id),
                PendingParent::Pending(index) => Some(ids[index]),
            };
            let kind = node.data.kind;
            let route = node.data.route.clone();
            let id = self.nodes.insert(node.data);
            self.children.insert(id, Vec::new());
            match parent {
                Some(parent) => {
                    self.parent.insert(id, parent);
                    if let Some(siblings) = self.children.get_mut(parent) {
                        siblings.push(id);
                    }
                }
                None => self.items.push(id),
            }
            if kind == NodeKind::Section {
                self.sections.insert(id, SectionNavigation::new());
            }
            self.routes.insert(route, id);
            ids.push(id);
        }
        self.counters = pending.counters;

        if self.current.is_none() {
            if let Some(path) = self.default_path(DefaultSelection::FirstDeclared) {
                self.navigate(path);
                if let Some(root) = self.content_root(path.content) {
                    if let Some(nav) = self.sections.get_mut(path.section) {
                        nav.install_root(path.content, root);
                    }
                }
            }
        }
        ids[pending.primary]
    }

    /// Plan and insert an item in one step.
    pub fn add_item(&mut self, item: ShellItem) -> Result<NodeId, NavigationError> {
        let pending = self.plan_item(item)?;
        Ok(self.commit(pending))
    }

    /// Plan and insert a section in one step.
    pub fn add_section(
        &mut self,
        item: Option<NodeId>,
        section: ShellSection,
    ) -> Result<NodeId, NavigationError> {
        let pending = self.plan_section(item, section)?;
        Ok(self.commit(pending))
    }

    /// Plan and insert a content in one step.
    pub fn add_content(
        &mut self,
        section: Option<NodeId>,
        content: ShellContent,
    ) -> Result<NodeId, NavigationError> {
        let pending = self.plan_content(section, content)?;
        Ok(self.commit(pending))
    }

    fn expect_kind(&self, id: NodeId, kind: NodeKind) -> Result<(), NavigationError> {
        match self.nodes.get(id) {
            Some(data) if data.kind == kind => Ok(()),
            Some(data) => Err(NavigationError::InvalidHierarchy {
                reason: format!("`{}` is a {}, expected a {kind}", data.route, data.kind),
            }),
            None => Err(NavigationError::InvalidHierarchy {
                reason: format!("no {kind} with id {id:?}"),
            }),
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Route of a node, or `""` for an unknown id.
    pub fn route(&self, id: NodeId) -> &str {
        self.nodes.get(id).map(|n| n.route.as_str()).unwrap_or("")
    }

    /// Locate a node at any level by its route.
    pub fn find_route(&self, route: &str) -> Option<NodeId> {
        self.routes.get(route).copied()
    }

    /// Whether a hierarchy node uses `route`.
    pub fn contains_route(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    /// Top-level items in declaration order.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Children in declaration order. Empty for contents and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// The child of `parent` whose route is `route`.
    pub fn child_by_route(&self, parent: NodeId, route: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.route(child) == route)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal of every node, items in order.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.items.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // ── Selection ────────────────────────────────────────────────────

    /// The current Item/Section/Content, once at least one item exists.
    pub fn current(&self) -> Option<CurrentPath> {
        self.current
    }

    /// The child chosen when a path leaves `parent`'s level out.
    pub fn default_child(&self, parent: NodeId, policy: DefaultSelection) -> Option<NodeId> {
        let first = self.children(parent).first().copied();
        match policy {
            DefaultSelection::FirstDeclared => first,
            DefaultSelection::Current => self.selected.get(parent).copied().or(first),
        }
    }

    /// The item chosen when a path names no hierarchy level at all.
    pub fn default_item(&self, policy: DefaultSelection) -> Option<NodeId> {
        let first = self.items.first().copied();
        match policy {
            DefaultSelection::FirstDeclared => first,
            DefaultSelection::Current => self.current.map(|c| c.item).or(first),
        }
    }

    /// Complete a path from a node at any level: ancestors come from the
    /// tree, missing descendants from `policy`.
    pub fn complete(&self, node: NodeId, policy: DefaultSelection) -> Option<CurrentPath> {
        let kind = self.nodes.get(node)?.kind;
        let (item, section) = match kind {
            NodeKind::Item => (node, self.default_child(node, policy)?),
            NodeKind::Section => (self.parent(node)?, node),
            NodeKind::Content => {
                let section = self.parent(node)?;
                (self.parent(section)?, section)
            }
        };
        let content = match kind {
            NodeKind::Content => node,
            _ => self.default_child(section, policy)?,
        };
        Some(CurrentPath::new(item, section, content))
    }

    /// The path selected when nothing is named.
    pub fn default_path(&self, policy: DefaultSelection) -> Option<CurrentPath> {
        self.complete(self.default_item(policy)?, policy)
    }

    /// Move all three current pointers at once.
    pub(crate) fn navigate(&mut self, path: CurrentPath) -> HierarchySwitch {
        let switch = match self.current {
            Some(previous) => previous.switch_to(&path),
            None => HierarchySwitch::Item,
        };
        self.selected.insert(path.item, path.section);
        self.selected.insert(path.section, path.content);
        self.current = Some(path);
        switch
    }

    /// Route of every non-implicit level of `path`, top down.
    pub fn hierarchy_routes(&self, path: &CurrentPath) -> Vec<String> {
        [path.item, path.section, path.content]
            .into_iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|data| !data.implicit)
            .map(|data| data.route.clone())
            .collect()
    }

    // ── Navigation state ─────────────────────────────────────────────

    /// A fresh instance of a content's root screen.
    pub fn content_root(&self, content: NodeId) -> Option<Screen> {
        self.nodes
            .get(content)
            .filter(|data| data.kind == NodeKind::Content)
            .map(NodeData::root_screen)
    }

    /// Navigation state of a section.
    pub fn navigation(&self, section: NodeId) -> Option<&SectionNavigation> {
        self.sections.get(section)
    }

    /// Replace a section's navigation state wholesale.
    pub(crate) fn set_navigation(&mut self, section: NodeId, navigation: SectionNavigation) {
        if let Some(slot) = self.sections.get_mut(section) {
            *slot = navigation;
        }
    }

    /// Navigation state of the current section.
    pub fn current_navigation(&self) -> Option<&SectionNavigation> {
        self.current.and_then(|c| self.sections.get(c.section))
    }

    /// Every section with its navigation state.
    pub fn sections(&self) -> impl Iterator<Item = (NodeId, &SectionNavigation)> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenDescriptor;

    fn item(route: &str, section: &str, content: &str) -> ShellItem {
        ShellItem::single(Some(route), Some(section), Some(content))
    }

    #[test]
    fn first_item_becomes_current_with_root() {
        let mut tree = ShellTree::new();
        assert!(tree.current().is_none());
        let id = tree.add_item(item("NewRoute", "Section", "Content")).unwrap();

        let current = tree.current().unwrap();
        assert_eq!(current.item, id);
        assert_eq!(tree.route(current.section), "Section");
        assert_eq!(tree.route(current.content), "Content");

        let nav = tree.current_navigation().unwrap();
        assert_eq!(nav.navigation_stack().len(), 1);
        assert_eq!(nav.content(), Some(current.content));
        assert_eq!(nav.current_screen().unwrap().route(), "Content");
    }

    #[test]
    fn second_item_does_not_change_current() {
        let mut tree = ShellTree::new();
        let first = tree.add_item(item("A", "AS", "AC")).unwrap();
        tree.add_item(item("B", "BS", "BC")).unwrap();
        assert_eq!(tree.current().unwrap().item, first);
        assert_eq!(tree.items().len(), 2);
        let b_section = tree.find_route("BS").unwrap();
        assert!(tree.navigation(b_section).unwrap().navigation_stack().is_empty());
    }

    #[test]
    fn default_routes_count_per_kind() {
        let mut tree = ShellTree::new();
        tree.add_item(ShellItem::single(None, None, None)).unwrap();
        tree.add_item(ShellItem::single(None, Some("Named"), None)).unwrap();
        let routes: Vec<&str> = tree.walk().into_iter().map(|id| tree.route(id)).collect();
        assert_eq!(
            routes,
            vec![
                "D_FAULT_ShellItem0",
                "D_FAULT_ShellSection0",
                "D_FAULT_ShellContent0",
                "D_FAULT_ShellItem1",
                "Named",
                "D_FAULT_ShellContent1",
            ]
        );
    }

    #[test]
    fn implicit_wrappers_for_section_and_content() {
        let mut tree = ShellTree::new();
        let section = tree
            .add_section(None, ShellSection::new().with_route("Tabs").with_content(ShellContent::new()))
            .unwrap();
        let wrapper = tree.parent(section).unwrap();
        assert_eq!(tree.route(wrapper), "IMPL_Tabs");
        assert!(tree.get(wrapper).unwrap().implicit);

        let content = tree
            .add_content(None, ShellContent::new().with_route("Feed"))
            .unwrap();
        let section = tree.parent(content).unwrap();
        let item = tree.parent(section).unwrap();
        assert_eq!(tree.route(section), "IMPL_Feed");
        assert_eq!(tree.route(item), "IMPL_IMPL_Feed");

        let path = tree.complete(content, DefaultSelection::FirstDeclared).unwrap();
        assert_eq!(tree.hierarchy_routes(&path), vec!["Feed".to_string()]);
    }

    #[test]
    fn add_under_existing_nodes() {
        let mut tree = ShellTree::new();
        let item_id = tree.add_item(item("Main", "Section", "Content")).unwrap();
        let section = tree
            .add_section(
                Some(item_id),
                ShellSection::new()
                    .with_route("Other")
                    .with_content(ShellContent::new().with_route("OtherContent")),
            )
            .unwrap();
        assert_eq!(tree.parent(section), Some(item_id));
        assert_eq!(tree.children(item_id).len(), 2);

        let first_section = tree.find_route("Section").unwrap();
        let content = tree
            .add_content(Some(first_section), ShellContent::new().with_route("Extra"))
            .unwrap();
        assert_eq!(tree.child_by_route(first_section, "Extra"), Some(content));
    }

    #[test]
    fn duplicate_hierarchy_route_conflicts() {
        let mut tree = ShellTree::new();
        tree.add_item(item("Main", "Section", "Content")).unwrap();
        let err = tree.add_item(item("Other", "Section", "X")).unwrap_err();
        assert!(matches!(err, NavigationError::RouteConflict { ref route, .. } if route == "Section"));
        // Nothing from the failed item was inserted.
        assert!(tree.find_route("Other").is_none());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn duplicate_within_one_item_conflicts() {
        let tree = ShellTree::new();
        let err = tree.plan_item(item("Same", "Same", "C")).unwrap_err();
        assert!(matches!(err, NavigationError::RouteConflict { .. }));
    }

    #[test]
    fn incomplete_item_is_invalid() {
        let mut tree = ShellTree::new();
        let err = tree.add_item(ShellItem::new().with_route("Empty")).unwrap_err();
        assert!(matches!(err, NavigationError::InvalidHierarchy { .. }));

        let err = tree
            .add_item(ShellItem::new().with_section(ShellSection::new()))
            .unwrap_err();
        assert!(matches!(err, NavigationError::InvalidHierarchy { .. }));
        assert!(tree.is_empty());
    }

    #[test]
    fn invalid_route_name_rejected() {
        let mut tree = ShellTree::new();
        let err = tree.add_item(item("bad route", "S", "C")).unwrap_err();
        assert!(matches!(err, NavigationError::InvalidRouteName { .. }));
    }

    #[test]
    fn wrong_parent_kind_rejected() {
        let mut tree = ShellTree::new();
        tree.add_item(item("Main", "Section", "Content")).unwrap();
        let content = tree.find_route("Content").unwrap();
        let err = tree
            .add_section(Some(content), ShellSection::new().with_content(ShellContent::new()))
            .unwrap_err();
        assert!(matches!(err, NavigationError::InvalidHierarchy { .. }));
    }

    #[test]
    fn complete_from_any_level() {
        let mut tree = ShellTree::new();
        tree.add_item(
            ShellItem::new()
                .with_route("Main")
                .with_section(
                    ShellSection::new()
                        .with_route("S1")
                        .with_content(ShellContent::new().with_route("C1"))
                        .with_content(ShellContent::new().with_route("C2")),
                )
                .with_section(
                    ShellSection::new()
                        .with_route("S2")
                        .with_content(ShellContent::new().with_route("C3")),
                ),
        )
        .unwrap();
        let policy = DefaultSelection::FirstDeclared;

        let from_item = tree.complete(tree.find_route("Main").unwrap(), policy).unwrap();
        assert_eq!(tree.route(from_item.content), "C1");

        let from_section = tree.complete(tree.find_route("S2").unwrap(), policy).unwrap();
        assert_eq!(tree.route(from_section.item), "Main");
        assert_eq!(tree.route(from_section.content), "C3");

        let from_content = tree.complete(tree.find_route("C2").unwrap(), policy).unwrap();
        assert_eq!(tree.route(from_content.section), "S1");
    }

    #[test]
    fn current_policy_remembers_selection() {
        let mut tree = ShellTree::new();
        tree.add_item(
            ShellItem::new().with_route("Main").with_section(
                ShellSection::new()
                    .with_route("S1")
                    .with_content(ShellContent::new().with_route("C1"))
                    .with_content(ShellContent::new().with_route("C2")),
            ),
        )
        .unwrap();
        let c2 = tree.complete(tree.find_route("C2").unwrap(), DefaultSelection::FirstDeclared).unwrap();
        assert_eq!(tree.navigate(c2), HierarchySwitch::Content);

        let main = tree.find_route("Main").unwrap();
        let first = tree.complete(main, DefaultSelection::FirstDeclared).unwrap();
        let remembered = tree.complete(main, DefaultSelection::Current).unwrap();
        assert_eq!(tree.route(first.content), "C1");
        assert_eq!(tree.route(remembered.content), "C2");
    }

    #[test]
    fn navigate_reports_switch_level() {
        let mut tree = ShellTree::new();
        tree.add_item(item("A", "AS", "AC")).unwrap();
        tree.add_item(item("B", "BS", "BC")).unwrap();
        let current = tree.current().unwrap();
        assert_eq!(tree.navigate(current), HierarchySwitch::None);

        let b = tree.complete(tree.find_route("B").unwrap(), DefaultSelection::FirstDeclared).unwrap();
        assert_eq!(tree.navigate(b), HierarchySwitch::Item);
        assert_eq!(tree.current(), Some(b));
    }

    #[test]
    fn content_root_uses_factory() {
        let mut tree = ShellTree::new();
        tree.add_item(
            ShellItem::new().with_route("Main").with_section(
                ShellSection::new().with_content(
                    ShellContent::new()
                        .with_route("Custom")
                        .with_root(|| ScreenDescriptor::new("CustomRoot").hosts_stack(false)),
                ),
            ),
        )
        .unwrap();
        let content = tree.find_route("Custom").unwrap();
        let root = tree.content_root(content).unwrap();
        assert_eq!(root.type_name(), "CustomRoot");
        assert!(tree.content_root(tree.find_route("Main").unwrap()).is_none());
    }

    #[test]
    fn set_navigation_replaces_state() {
        let mut tree = ShellTree::new();
        tree.add_item(item("Main", "Section", "Content")).unwrap();
        let section = tree.current().unwrap().section;
        tree.set_navigation(section, SectionNavigation::new());
        assert!(tree.navigation(section).unwrap().navigation_stack().is_empty());
    }
}
