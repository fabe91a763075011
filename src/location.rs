//! Canonical location of a shell and the channel it is published on.

use std::fmt;

use tokio::sync::watch;

use crate::hierarchy::ShellTree;

/// The serialized navigation state.
///
/// `hierarchy` holds the current Item/Section/Content routes (implicit
/// wrappers left out); `segments` holds the section stack above its root
/// followed by every modal context's full stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShellLocation {
    pub hierarchy: Vec<String>,
    pub segments: Vec<String>,
}

impl ShellLocation {
    /// Compute the location of `tree` as it stands.
    pub fn of(tree: &ShellTree) -> Self {
        let Some(current) = tree.current() else {
            return Self::default();
        };
        let segments = tree
            .navigation(current.section)
            .map(|nav| nav.location_segments().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            hierarchy: tree.hierarchy_routes(&current),
            segments,
        }
    }

    /// Whether the shell had nothing to locate.
    pub fn is_empty(&self) -> bool {
        self.hierarchy.is_empty() && self.segments.is_empty()
    }

    /// All parts, hierarchy first.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.hierarchy
            .iter()
            .chain(self.segments.iter())
            .map(String::as_str)
    }

    /// The last pushed route, if any.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for ShellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("/")?;
        for part in self.parts() {
            write!(f, "/{part}")?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for ShellLocation {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

// ---------------------------------------------------------------------------
// LocationTracker
// ---------------------------------------------------------------------------

/// Holds the latest location and notifies subscribers when it changes.
#[derive(Debug)]
pub struct LocationTracker {
    sender: watch::Sender<ShellLocation>,
}

impl LocationTracker {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ShellLocation::default());
        Self { sender }
    }

    /// The latest published location.
    pub fn current(&self) -> ShellLocation {
        self.sender.borrow().clone()
    }

    /// Publish `location`. Subscribers are only woken if it differs from the
    /// previous one. Returns whether it changed.
    pub fn publish(&self, location: ShellLocation) -> bool {
        self.sender.send_if_modified(|slot| {
            if *slot == location {
                false
            } else {
                *slot = location;
                true
            }
        })
    }

    /// Recompute from `tree` and publish.
    pub fn recompute(&self, tree: &ShellTree) -> bool {
        self.publish(ShellLocation::of(tree))
    }

    /// A receiver that observes every published change.
    pub fn subscribe(&self) -> watch::Receiver<ShellLocation> {
        self.sender.subscribe()
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}
