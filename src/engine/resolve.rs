//! Path resolution: `RoutePath` → `NavigationPlan`.
//!
//! Absolute paths are matched against the hierarchy first. The first segment
//! may name a node at any level; following segments may name the next levels
//! down. Whatever is left over is looked up in the route registry and
//! instantiated, so every screen exists before anything is committed.

use tracing::debug;

use super::plan::{NavigationPlan, PopStep};
use crate::error::NavigationError;
use crate::hierarchy::{CurrentPath, DefaultSelection, NodeId, NodeKind, ShellTree};
use crate::route::{PathKind, RouteRegistry, RoutePath};
use crate::screen::Screen;

/// Resolve a parsed path against the current tree and registry.
pub fn resolve(
    path: RoutePath,
    tree: &ShellTree,
    registry: &RouteRegistry,
    policy: DefaultSelection,
) -> Result<NavigationPlan, NavigationError> {
    if tree.current().is_none() {
        return Err(NavigationError::EmptyShell);
    }
    match path.kind {
        PathKind::Relative => {
            let pops = vec![PopStep::Screen; path.parent_count()];
            let screens = instantiate(path.routes(), registry)?;
            debug!(path = %path, pops = pops.len(), screens = screens.len(), "resolved relative path");
            Ok(NavigationPlan::relative(path, pops, screens))
        }
        PathKind::Absolute | PathKind::Reset => {
            let routes: Vec<&str> = path.routes().collect();
            let (target, consumed) = match_hierarchy(&routes, tree, policy)?;
            let screens = instantiate(routes[consumed..].iter().copied(), registry)?;
            debug!(
                path = %path,
                item = tree.route(target.item),
                section = tree.route(target.section),
                content = tree.route(target.content),
                screens = screens.len(),
                "resolved absolute path"
            );
            let reset = path.kind == PathKind::Reset;
            Ok(NavigationPlan::absolute(path, target, reset, screens))
        }
    }
}

/// Match leading routes against the hierarchy.
///
/// Returns the selected path and how many routes it consumed. A path whose
/// first route names no node consumes nothing and selects the default path.
/// After an item, a content may be named without its section.
pub fn match_hierarchy(
    routes: &[&str],
    tree: &ShellTree,
    policy: DefaultSelection,
) -> Result<(CurrentPath, usize), NavigationError> {
    let matched = routes.first().and_then(|first| tree.find_route(first));
    let Some(mut deepest) = matched else {
        let target = tree.default_path(policy).ok_or(NavigationError::EmptyShell)?;
        return Ok((target, 0));
    };

    let mut consumed = 1;
    while let Some(route) = routes.get(consumed) {
        let is_leaf = tree.get(deepest).map(|n| n.kind) == Some(NodeKind::Content);
        if is_leaf {
            break;
        }
        let next = tree
            .child_by_route(deepest, route)
            .or_else(|| content_under_item(tree, deepest, route));
        match next {
            Some(child) => {
                deepest = child;
                consumed += 1;
            }
            None => break,
        }
    }

    let target = tree
        .complete(deepest, policy)
        .ok_or_else(|| NavigationError::InvalidHierarchy {
            reason: format!("`{}` has no content to select", tree.route(deepest)),
        })?;
    Ok((target, consumed))
}

/// A content of any of `item`'s sections, for paths that leave the section out.
fn content_under_item(tree: &ShellTree, item: NodeId, route: &str) -> Option<NodeId> {
    if tree.get(item)?.kind != NodeKind::Item {
        return None;
    }
    tree.children(item)
        .iter()
        .find_map(|&section| tree.child_by_route(section, route))
}

/// Look up and instantiate each route in order.
fn instantiate<'a>(
    routes: impl Iterator<Item = &'a str>,
    registry: &RouteRegistry,
) -> Result<Vec<Screen>, NavigationError> {
    routes.map(|route| registry.instantiate(route)).collect()
}
