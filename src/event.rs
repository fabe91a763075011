//! Navigation events and the queue the shell records them in.
//!
//! Every successful navigation enqueues a [`NavigationEvent::Navigating`]
//! followed by a [`NavigationEvent::Navigated`]. A failed navigation enqueues
//! nothing. The UI layer drains the queue after each call.

use std::collections::VecDeque;
use std::fmt;

use crate::location::ShellLocation;

// ---------------------------------------------------------------------------
// NavigationSource
// ---------------------------------------------------------------------------

/// What kind of change a navigation made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSource {
    /// Screens were pushed without leaving the current content.
    Push,
    /// Screens or modal contexts were popped.
    Pop,
    /// The section was reset to its root.
    PopToRoot,
    ShellItemChanged,
    ShellSectionChanged,
    ShellContentChanged,
    /// Nothing identifiable changed, e.g. re-selecting the current content.
    Unknown,
}

impl fmt::Display for NavigationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NavigationSource::Push => "Push",
            NavigationSource::Pop => "Pop",
            NavigationSource::PopToRoot => "PopToRoot",
            NavigationSource::ShellItemChanged => "ShellItemChanged",
            NavigationSource::ShellSectionChanged => "ShellSectionChanged",
            NavigationSource::ShellContentChanged => "ShellContentChanged",
            NavigationSource::Unknown => "Unknown",
        })
    }
}

// ---------------------------------------------------------------------------
// NavigationEvent
// ---------------------------------------------------------------------------

/// A navigation notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// About to commit: `current` is the location before, `target` the
    /// requested path.
    Navigating {
        current: ShellLocation,
        target: String,
        source: NavigationSource,
    },
    /// Committed: `previous` is the location before, `current` after.
    Navigated {
        previous: ShellLocation,
        current: ShellLocation,
        source: NavigationSource,
    },
}

impl NavigationEvent {
    pub fn source(&self) -> NavigationSource {
        match self {
            NavigationEvent::Navigating { source, .. } | NavigationEvent::Navigated { source, .. } => *source,
        }
    }

    /// Short name for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            NavigationEvent::Navigating { .. } => "Navigating",
            NavigationEvent::Navigated { .. } => "Navigated",
        }
    }
}

// ---------------------------------------------------------------------------
// EventQueue
// ---------------------------------------------------------------------------

/// FIFO queue of navigation events.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<NavigationEvent>,
}

impl EventQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event.
    pub fn push(&mut self, event: NavigationEvent) {
        self.queue.push_back(event);
    }

    /// Drain all pending events in order. The queue is empty afterwards.
    pub fn drain(&mut self) -> Vec<NavigationEvent> {
        self.queue.drain(..).collect()
    }

    /// Peek at the most recent event.
    pub fn last(&self) -> Option<&NavigationEvent> {
        self.queue.back()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
