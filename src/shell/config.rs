//! Shell configuration.

use crate::hierarchy::DefaultSelection;
use crate::route::DuplicateRoutePolicy;

/// Default capacity of the request channel behind a `ShellHandle`.
pub const DEFAULT_REQUEST_BUFFER: usize = 16;

/// Configuration for a [`Shell`](super::Shell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// What registering an existing global route does.
    pub duplicate_routes: DuplicateRoutePolicy,
    /// How absolute paths fill in hierarchy levels they leave out.
    pub default_selection: DefaultSelection,
    /// Capacity of the request channel used by `Shell::spawn`.
    pub request_buffer: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            duplicate_routes: DuplicateRoutePolicy::default(),
            default_selection: DefaultSelection::default(),
            request_buffer: DEFAULT_REQUEST_BUFFER,
        }
    }
}

impl ShellConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-route policy (builder).
    pub fn with_duplicate_routes(mut self, policy: DuplicateRoutePolicy) -> Self {
        self.duplicate_routes = policy;
        self
    }

    /// Set the default-selection rule (builder).
    pub fn with_default_selection(mut self, selection: DefaultSelection) -> Self {
        self.default_selection = selection;
        self
    }

    /// Set the request channel capacity (builder). Clamped to at least 1.
    pub fn with_request_buffer(mut self, capacity: usize) -> Self {
        self.request_buffer = capacity.max(1);
        self
    }
}
