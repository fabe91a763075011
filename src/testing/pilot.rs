//! Pilot: programmatic driving of a shell in tests.
//!
//! The `Pilot` wraps a [`Shell`] and provides shorthand for registering
//! routes, building a one-item hierarchy, navigating, and reading back stacks
//! and locations as plain strings.

use crate::error::NavigationError;
use crate::event::NavigationEvent;
use crate::hierarchy::ShellItem;
use crate::lifecycle::LifecycleEvent;
use crate::navigation::SectionNavigation;
use crate::screen::{Screen, ScreenDescriptor};
use crate::shell::{Shell, ShellConfig};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A shell driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_nav::testing::Pilot;
///
/// let mut pilot = Pilot::new()
///     .with_modal("ModalTestPage")
///     .with_item("NewRoute", "Section", "Content");
/// pilot.go_to("ModalTestPage").unwrap();
/// assert_eq!(pilot.modal_depth(), 1);
/// ```
pub struct Pilot {
    shell: Shell,
}

impl Pilot {
    /// Create a pilot around an empty shell with `ContentPage` registered.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create a pilot from a [`ShellConfig`].
    ///
    /// # Panics
    ///
    /// Panics if `ContentPage` cannot be registered.
    pub fn with_config(config: ShellConfig) -> Self {
        let mut pilot = Self {
            shell: Shell::with_config(config),
        };
        pilot.register("ContentPage", ScreenDescriptor::new("ContentPage"));
        pilot
    }

    /// Wrap an existing shell.
    pub fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    // ── Setup ────────────────────────────────────────────────────────

    /// Register a modal route whose screen type is named after the route.
    ///
    /// # Panics
    ///
    /// Panics if the route cannot be registered.
    pub fn with_modal(mut self, route: &'static str) -> Self {
        self.register(route, ScreenDescriptor::new(route).modal(true));
        self
    }

    /// Register a non-modal route whose screen type is named after the route.
    pub fn with_page(mut self, route: &'static str) -> Self {
        self.register(route, ScreenDescriptor::new(route));
        self
    }

    /// Register `route` to produce copies of `descriptor`.
    pub fn with_route(mut self, route: &'static str, descriptor: ScreenDescriptor) -> Self {
        self.register(route, descriptor);
        self
    }

    /// Add an item holding one section with one content.
    ///
    /// # Panics
    ///
    /// Panics if the hierarchy rejects the item.
    pub fn with_item(mut self, item: &str, section: &str, content: &str) -> Self {
        if let Err(err) = self
            .shell
            .add_item(ShellItem::single(Some(item), Some(section), Some(content)))
        {
            panic!("pilot could not add item `{item}`: {err}");
        }
        self
    }

    fn register(&mut self, route: &'static str, descriptor: ScreenDescriptor) {
        if let Err(err) = self.shell.register_route(route, move || descriptor.clone()) {
            panic!("pilot could not register `{route}`: {err}");
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn go_to(&mut self, path: &str) -> Result<(), NavigationError> {
        self.shell.go_to(path)
    }

    /// Navigate through each path in turn, stopping at the first failure.
    pub fn go_through(&mut self, paths: &[&str]) -> Result<(), NavigationError> {
        paths.iter().try_for_each(|path| self.shell.go_to(path))
    }

    pub fn pop(&mut self) -> Result<(), NavigationError> {
        self.shell.pop()
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying shell immutably.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Borrow the underlying shell mutably.
    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    /// Take the shell back.
    pub fn into_shell(self) -> Shell {
        self.shell
    }

    /// The current location as a string.
    pub fn location(&self) -> String {
        self.shell.current_location().to_string()
    }

    /// Number of modal contexts over the current section.
    pub fn modal_depth(&self) -> usize {
        self.shell.modal_stack().map_or(0, |modal| modal.len())
    }

    /// Routes of the current section's own stack, root first.
    pub fn stack_routes(&self) -> Vec<String> {
        self.navigation()
            .map(|nav| routes(nav.navigation_stack().iter()))
            .unwrap_or_default()
    }

    /// Routes of modal context `index`, root first.
    pub fn modal_routes(&self, index: usize) -> Vec<String> {
        self.shell
            .modal_stack()
            .and_then(|modal| modal.get(index))
            .map(|context| routes(context.navigation().iter()))
            .unwrap_or_default()
    }

    /// Type name of the visible screen.
    pub fn visible_type(&self) -> Option<&str> {
        self.shell.current_screen().map(Screen::type_name)
    }

    /// The whole shell rendered by [`shell_to_string`](super::snapshot::shell_to_string).
    pub fn dump(&self) -> String {
        super::snapshot::shell_to_string(&self.shell)
    }

    /// Drain queued navigation events.
    pub fn events(&mut self) -> Vec<NavigationEvent> {
        self.shell.events.drain()
    }

    /// Drain queued lifecycle events.
    pub fn lifecycle(&mut self) -> Vec<LifecycleEvent> {
        self.shell.lifecycle.pending_events()
    }

    fn navigation(&self) -> Option<&SectionNavigation> {
        self.shell.current_navigation()
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

fn routes<'a>(screens: impl Iterator<Item = &'a Screen>) -> Vec<String> {
    screens.map(|s| s.route().to_string()).collect()
}

// ===========================================================================
// Tests
// ===========================================================================
