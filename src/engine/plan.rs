//! Navigation plans: the resolved, not-yet-applied form of a `go_to` call.
//!
//! A plan is pure data. Building one touches neither the hierarchy nor the
//! stacks, so a failure while planning leaves nothing behind. Every screen a
//! plan will push has already been instantiated.

use crate::hierarchy::CurrentPath;
use crate::route::RoutePath;
use crate::screen::Screen;

/// One pop applied before any push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopStep {
    /// Pop the visible screen; a modal context left with only its root is
    /// dismissed.
    Screen,
    /// Dismiss the top modal context.
    ModalContext,
    /// Dismiss every modal context and pop the section stack to its root.
    ToRoot,
}

/// Where a plan lands in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTarget {
    /// Stay on the current Item/Section/Content.
    Relative,
    /// Select `target`, rebuilding its section's stacks from the plan.
    Absolute {
        target: CurrentPath,
        /// `///`: the previous section's stack is also reset to its root.
        reset: bool,
    },
}

/// A fully resolved navigation.
#[derive(Debug, Clone)]
pub struct NavigationPlan {
    /// The path this plan was built from.
    pub path: RoutePath,
    pub target: PlanTarget,
    /// Pops, applied in order before anything is pushed.
    pub pops: Vec<PopStep>,
    /// Non-modal screens before the first modal one.
    pub leading: Vec<Screen>,
    /// Each run starts with a modal screen and opens its own context.
    pub modal_runs: Vec<Vec<Screen>>,
}

impl NavigationPlan {
    /// A plan that pushes `screens` without moving in the hierarchy.
    pub fn relative(path: RoutePath, pops: Vec<PopStep>, screens: Vec<Screen>) -> Self {
        let (leading, modal_runs) = classify(screens);
        Self {
            path,
            target: PlanTarget::Relative,
            pops,
            leading,
            modal_runs,
        }
    }

    /// A plan that selects `target` and then pushes `screens`.
    pub fn absolute(path: RoutePath, target: CurrentPath, reset: bool, screens: Vec<Screen>) -> Self {
        let (leading, modal_runs) = classify(screens);
        Self {
            path,
            target: PlanTarget::Absolute { target, reset },
            pops: Vec::new(),
            leading,
            modal_runs,
        }
    }

    /// Whether the plan pushes anything.
    pub fn pushes(&self) -> bool {
        !self.leading.is_empty() || !self.modal_runs.is_empty()
    }

    /// Whether the plan presents at least one modal.
    pub fn presents_modal(&self) -> bool {
        !self.modal_runs.is_empty()
    }

    /// Every screen the plan pushes, in push order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.leading.iter().chain(self.modal_runs.iter().flatten())
    }
}

/// Split screens into the leading non-modal run and the modal runs.
///
/// A new run starts at every modal screen; the non-modal screens after it
/// belong to that run and are pushed inside its context.
pub fn classify(screens: Vec<Screen>) -> (Vec<Screen>, Vec<Vec<Screen>>) {
    let mut leading = Vec::new();
    let mut runs: Vec<Vec<Screen>> = Vec::new();
    for screen in screens {
        if screen.is_modal() {
            runs.push(vec![screen]);
        } else if let Some(run) = runs.last_mut() {
            run.push(screen);
        } else {
            leading.push(screen);
        }
    }
    (leading, runs)
}
