//! Stack reconciliation: apply a plan to copies of the affected sections.
//!
//! Nothing here touches the tree. The result is a [`StagedCommit`] holding
//! the replacement navigation state for every section the plan changes; the
//! shell swaps it in only once the whole plan has applied cleanly.

use tracing::debug;

use super::plan::{NavigationPlan, PlanTarget, PopStep};
use crate::error::NavigationError;
use crate::event::NavigationSource;
use crate::hierarchy::{CurrentPath, HierarchySwitch, NodeId, ShellTree};
use crate::navigation::SectionNavigation;

/// Fully applied navigation state, ready to be swapped in.
#[derive(Debug, Clone)]
pub struct StagedCommit {
    /// The selection after the commit.
    pub target: CurrentPath,
    pub switch: HierarchySwitch,
    pub source: NavigationSource,
    /// Replacement state per section, in the order it was staged.
    pub sections: Vec<(NodeId, SectionNavigation)>,
}

impl StagedCommit {
    /// Apply to the tree. Infallible: every check already ran while staging.
    pub(crate) fn apply(self, tree: &mut ShellTree) -> HierarchySwitch {
        for (section, navigation) in self.sections {
            tree.set_navigation(section, navigation);
        }
        tree.navigate(self.target);
        self.switch
    }
}

/// Apply `plan` to copies of the affected sections of `tree`.
pub fn stage(plan: NavigationPlan, tree: &ShellTree) -> Result<StagedCommit, NavigationError> {
    let current = tree.current().ok_or(NavigationError::EmptyShell)?;
    match plan.target {
        PlanTarget::Relative => stage_relative(plan, current, tree),
        PlanTarget::Absolute { target, reset } => stage_absolute(plan, current, target, reset, tree),
    }
}

fn stage_relative(
    plan: NavigationPlan,
    current: CurrentPath,
    tree: &ShellTree,
) -> Result<StagedCommit, NavigationError> {
    let mut nav = section_copy(tree, current.section);

    for pop in &plan.pops {
        match pop {
            PopStep::Screen => nav.pop()?,
            PopStep::ModalContext => {
                nav.pop_modal()?;
            }
            PopStep::ToRoot => {
                nav.dismiss_modals();
                nav.truncate_to_root();
            }
        }
    }

    if plan.pushes() && !plan.presents_modal() && !nav.modal_stack().is_empty() {
        debug!(contexts = nav.modal_stack().len(), "non-modal push clears modal stack");
        nav.dismiss_modals();
    }

    let source = if plan.pushes() {
        NavigationSource::Push
    } else if plan.pops.contains(&PopStep::ToRoot) {
        NavigationSource::PopToRoot
    } else if plan.pops.is_empty() {
        NavigationSource::Unknown
    } else {
        NavigationSource::Pop
    };

    push_plan(&mut nav, plan)?;

    Ok(StagedCommit {
        target: current,
        switch: HierarchySwitch::None,
        source,
        sections: vec![(current.section, nav)],
    })
}

fn stage_absolute(
    plan: NavigationPlan,
    current: CurrentPath,
    target: CurrentPath,
    reset: bool,
    tree: &ShellTree,
) -> Result<StagedCommit, NavigationError> {
    let switch = current.switch_to(&target);
    let mut sections = Vec::with_capacity(2);

    if switch.changes_section() {
        let mut previous = section_copy(tree, current.section);
        previous.dismiss_modals();
        if reset {
            previous.truncate_to_root();
        }
        sections.push((current.section, previous));
    }

    let mut nav = section_copy(tree, target.section);
    nav.dismiss_modals();
    if nav.content() == Some(target.content) && !nav.navigation_stack().is_empty() {
        nav.truncate_to_root();
    } else {
        let root = tree
            .content_root(target.content)
            .ok_or_else(|| NavigationError::InvalidHierarchy {
                reason: format!("`{}` is not a content", tree.route(target.content)),
            })?;
        nav.install_root(target.content, root);
    }

    let source = match switch {
        HierarchySwitch::Item => NavigationSource::ShellItemChanged,
        HierarchySwitch::Section => NavigationSource::ShellSectionChanged,
        HierarchySwitch::Content => NavigationSource::ShellContentChanged,
        HierarchySwitch::None if plan.pushes() => NavigationSource::Push,
        HierarchySwitch::None => NavigationSource::Unknown,
    };

    push_plan(&mut nav, plan)?;
    sections.push((target.section, nav));

    Ok(StagedCommit {
        target,
        switch,
        source,
        sections,
    })
}

/// Push the leading run onto the effective stack, then open one context per
/// modal run.
fn push_plan(nav: &mut SectionNavigation, plan: NavigationPlan) -> Result<(), NavigationError> {
    for screen in plan.leading {
        nav.push(screen)?;
    }
    for run in plan.modal_runs {
        nav.present(run)?;
    }
    Ok(())
}

fn section_copy(tree: &ShellTree, section: NodeId) -> SectionNavigation {
    tree.navigation(section).cloned().unwrap_or_default()
}
