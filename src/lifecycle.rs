//! Screen lifecycle: mount, unmount, appear, disappear.
//!
//! The `LifecycleTracker` records which screens are alive in any stack and
//! which one is visible. After each navigation the shell hands it the new set
//! of live screens and the new visible screen; the differences become
//! lifecycle events for the UI layer to drain.

use std::collections::HashSet;

use crate::screen::ScreenId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during a screen's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The screen entered a stack.
    Mount { screen: ScreenId },
    /// The screen left every stack.
    Unmount { screen: ScreenId },
    /// The screen became the visible one.
    Appearing { screen: ScreenId },
    /// The screen stopped being the visible one.
    Disappearing { screen: ScreenId },
}

impl LifecycleEvent {
    pub fn screen(&self) -> ScreenId {
        match *self {
            LifecycleEvent::Mount { screen }
            | LifecycleEvent::Unmount { screen }
            | LifecycleEvent::Appearing { screen }
            | LifecycleEvent::Disappearing { screen } => screen,
        }
    }
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks live and visible screens and accumulates lifecycle events.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    /// Screens currently held by some stack.
    mounted: HashSet<ScreenId>,
    /// The visible screen.
    visible: Option<ScreenId>,
    /// Pending lifecycle events, in order of occurrence.
    pending: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// Create a new, empty lifecycle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a screen has been mounted. No-op if already mounted.
    pub fn on_mount(&mut self, id: ScreenId) {
        if self.mounted.insert(id) {
            self.pending.push(LifecycleEvent::Mount { screen: id });
        }
    }

    /// Record that a screen has been unmounted. No-op if not mounted.
    pub fn on_unmount(&mut self, id: ScreenId) {
        if self.mounted.remove(&id) {
            self.pending.push(LifecycleEvent::Unmount { screen: id });
        }
    }

    /// Bring the tracker in line with the shell after a navigation.
    ///
    /// Events come out as: the old visible screen disappearing, unmounts,
    /// mounts in `live` order, then the new visible screen appearing.
    pub fn sync(&mut self, live: &[ScreenId], visible: Option<ScreenId>) {
        let changed_visible = self.visible != visible;
        if changed_visible {
            if let Some(old) = self.visible {
                self.pending.push(LifecycleEvent::Disappearing { screen: old });
            }
        }

        let keep: HashSet<ScreenId> = live.iter().copied().collect();
        let mut gone: Vec<ScreenId> = self
            .mounted
            .iter()
            .copied()
            .filter(|id| !keep.contains(id))
            .collect();
        // Newest first, the order stacks unwind in.
        gone.sort_unstable_by(|a, b| b.cmp(a));
        for id in gone {
            self.on_unmount(id);
        }
        for &id in live {
            self.on_mount(id);
        }

        if changed_visible {
            if let Some(new) = visible {
                self.pending.push(LifecycleEvent::Appearing { screen: new });
            }
            self.visible = visible;
        }
    }

    pub fn is_mounted(&self, id: ScreenId) -> bool {
        self.mounted.contains(&id)
    }

    /// The screen that last appeared.
    pub fn visible(&self) -> Option<ScreenId> {
        self.visible
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Drain and return all pending lifecycle events.
    pub fn pending_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Clear all state (mounted screens, visibility and pending events).
    pub fn clear(&mut self) {
        self.mounted.clear();
        self.visible = None;
        self.pending.clear();
    }
}
