//! The shell: owns the route registry, the hierarchy and the location.
//!
//! [`Shell`] is the facade the UI layer drives. Navigation goes through
//! [`Shell::go_to`]: the path is parsed and resolved into a plan, and the plan
//! is committed through the configured [`Dispatcher`]. A failed navigation
//! leaves the tree, the stacks, the location and the event queue untouched.

pub mod config;
pub mod handle;

use tokio::sync::watch;
use tracing::{debug, info, warn};

pub use config::ShellConfig;
pub use handle::ShellHandle;

use crate::dispatch::{Dispatcher, InlineDispatcher};
use crate::engine::{self, NavigationPlan, PopStep};
use crate::error::NavigationError;
use crate::event::{EventQueue, NavigationEvent, NavigationSource};
use crate::hierarchy::{CurrentPath, HierarchySwitch, NodeId, ShellContent, ShellItem, ShellSection, ShellTree};
use crate::hierarchy::PendingNodes;
use crate::lifecycle::LifecycleTracker;
use crate::location::{LocationTracker, ShellLocation};
use crate::navigation::{ModalStack, SectionNavigation};
use crate::route::{PathKind, PathSegment, RouteRegistry, RoutePath};
use crate::screen::{Screen, ScreenDescriptor, ScreenId, ScreenType};

/// The navigation shell.
///
/// Single owner: every navigation takes `&mut self`. Use [`Shell::spawn`] to
/// share one across tasks.
pub struct Shell {
    /// Navigation events, drained by the UI layer.
    pub events: EventQueue,
    /// Screen mount/appear tracking.
    pub lifecycle: LifecycleTracker,
    config: ShellConfig,
    registry: RouteRegistry,
    tree: ShellTree,
    location: LocationTracker,
    dispatcher: Box<dyn Dispatcher>,
}

impl Shell {
    /// Create an empty shell with the default config.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create an empty shell with `config`.
    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            events: EventQueue::new(),
            lifecycle: LifecycleTracker::new(),
            config,
            registry: RouteRegistry::with_policy(config.duplicate_routes),
            tree: ShellTree::new(),
            location: LocationTracker::new(),
            dispatcher: Box::new(InlineDispatcher),
        }
    }

    /// Commit navigations through `dispatcher` (builder).
    pub fn with_dispatcher(mut self, dispatcher: impl Dispatcher + 'static) -> Self {
        self.set_dispatcher(dispatcher);
        self
    }

    pub fn set_dispatcher(&mut self, dispatcher: impl Dispatcher + 'static) {
        self.dispatcher = Box::new(dispatcher);
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Move the shell into a tokio task and return a handle to it.
    ///
    /// Fails with `NoRuntime` outside a tokio runtime; the shell is dropped.
    pub fn spawn(self) -> Result<ShellHandle, NavigationError> {
        ShellHandle::spawn(self)
    }

    // ── Routes ───────────────────────────────────────────────────────

    /// Register a global route.
    ///
    /// Fails with `RouteConflict` if a hierarchy node already uses `name`.
    pub fn register_route<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), NavigationError>
    where
        F: Fn() -> ScreenDescriptor + Send + Sync + 'static,
    {
        let name = name.into();
        if self.tree.contains_route(&name) {
            return Err(NavigationError::RouteConflict {
                route: name,
                scope: "shell hierarchy",
            });
        }
        self.registry.register(name, factory)
    }

    /// Register a global route for the screen type `T`.
    pub fn register_type<T: ScreenType>(&mut self, name: impl Into<String>) -> Result<(), NavigationError> {
        self.register_route(name, T::descriptor)
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    // ── Hierarchy ────────────────────────────────────────────────────

    /// Add a top-level item. The first item added becomes current.
    pub fn add_item(&mut self, item: ShellItem) -> Result<NodeId, NavigationError> {
        let pending = self.tree.plan_item(item)?;
        self.insert(pending)
    }

    /// Add a section wrapped in an implicit item.
    pub fn add_section(&mut self, section: ShellSection) -> Result<NodeId, NavigationError> {
        let pending = self.tree.plan_section(None, section)?;
        self.insert(pending)
    }

    /// Add a section under an existing item.
    pub fn add_section_to(&mut self, item: NodeId, section: ShellSection) -> Result<NodeId, NavigationError> {
        let pending = self.tree.plan_section(Some(item), section)?;
        self.insert(pending)
    }

    /// Add a content wrapped in an implicit item and section.
    pub fn add_content(&mut self, content: ShellContent) -> Result<NodeId, NavigationError> {
        let pending = self.tree.plan_content(None, content)?;
        self.insert(pending)
    }

    /// Add a content under an existing section.
    pub fn add_content_to(&mut self, section: NodeId, content: ShellContent) -> Result<NodeId, NavigationError> {
        let pending = self.tree.plan_content(Some(section), content)?;
        self.insert(pending)
    }

    fn insert(&mut self, pending: PendingNodes) -> Result<NodeId, NavigationError> {
        if let Some(route) = pending.routes().find(|route| self.registry.contains(route)) {
            return Err(NavigationError::RouteConflict {
                route: route.to_string(),
                scope: "route registry",
            });
        }
        let id = self.tree.commit(pending);
        debug!(route = self.tree.route(id), nodes = self.tree.len(), "added to hierarchy");
        self.refresh();
        Ok(id)
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Navigate to `path`.
    ///
    /// On error nothing changes: no stack, pointer, location or event is
    /// touched.
    pub fn go_to(&mut self, path: &str) -> Result<(), NavigationError> {
        let parsed = RoutePath::parse(path)?;
        let plan = engine::resolve(parsed, &self.tree, &self.registry, self.config.default_selection)?;
        self.commit(plan, path)
    }

    /// Pop the visible screen. Same as `go_to("..")`.
    pub fn pop(&mut self) -> Result<(), NavigationError> {
        self.go_to("..")
    }

    /// Dismiss the top modal context.
    pub fn pop_modal(&mut self) -> Result<(), NavigationError> {
        self.commit_pops(PopStep::ModalContext)
    }

    /// Dismiss every modal context and pop the section stack to its root.
    pub fn pop_to_root(&mut self) -> Result<(), NavigationError> {
        self.commit_pops(PopStep::ToRoot)
    }

    fn commit_pops(&mut self, step: PopStep) -> Result<(), NavigationError> {
        let path = RoutePath {
            kind: PathKind::Relative,
            segments: vec![PathSegment::Parent],
        };
        let target = path.to_string();
        let plan = NavigationPlan::relative(path, vec![step], Vec::new());
        self.commit(plan, &target)
    }

    /// Stage and apply `plan` through the dispatcher.
    fn commit(&mut self, plan: NavigationPlan, target: &str) -> Result<(), NavigationError> {
        let mut plan = Some(plan);
        let mut slot: Option<Result<(NavigationSource, HierarchySwitch), NavigationError>> = None;
        let tree = &mut self.tree;

        let dispatched = self.dispatcher.invoke(&mut || {
            let Some(plan) = plan.take() else {
                return Ok(());
            };
            let result = engine::stage(plan, tree).map(|staged| {
                let source = staged.source;
                (source, staged.apply(tree))
            });
            let reported = result.as_ref().map(|_| ()).map_err(Clone::clone);
            slot = Some(result);
            reported
        });

        let (source, switch) = match (slot, dispatched) {
            (Some(Err(err)), _) => {
                debug!(path = target, error = %err, "navigation failed");
                return Err(err);
            }
            (Some(Ok(outcome)), Err(err)) => {
                warn!(path = target, error = %err, "dispatcher reported an error after a successful commit");
                outcome
            }
            (Some(Ok(outcome)), Ok(())) => outcome,
            (None, Err(err)) => {
                debug!(path = target, error = %err, "dispatcher refused navigation");
                return Err(err);
            }
            (None, Ok(())) => return Err(NavigationError::DispatchDropped),
        };

        let previous = self.location.current();
        let current = ShellLocation::of(&self.tree);
        self.events.push(NavigationEvent::Navigating {
            current: previous.clone(),
            target: target.to_string(),
            source,
        });
        self.events.push(NavigationEvent::Navigated {
            previous,
            current: current.clone(),
            source,
        });
        info!(path = target, location = %current, source = %source, switch = ?switch, "navigated");
        self.location.publish(current);
        self.sync_lifecycle();
        Ok(())
    }

    /// Republish the location and resync lifecycle after a hierarchy change.
    fn refresh(&mut self) {
        self.location.recompute(&self.tree);
        self.sync_lifecycle();
    }

    fn sync_lifecycle(&mut self) {
        let live: Vec<ScreenId> = self
            .tree
            .sections()
            .flat_map(|(_, nav)| nav.screen_ids())
            .collect();
        let visible = self.current_screen().map(Screen::id);
        self.lifecycle.sync(&live, visible);
    }

    // ── Observation ──────────────────────────────────────────────────

    /// The latest location.
    pub fn current_location(&self) -> ShellLocation {
        self.location.current()
    }

    /// A receiver woken on every location change.
    pub fn subscribe_location(&self) -> watch::Receiver<ShellLocation> {
        self.location.subscribe()
    }

    /// The current Item/Section/Content.
    pub fn current(&self) -> Option<CurrentPath> {
        self.tree.current()
    }

    pub fn tree(&self) -> &ShellTree {
        &self.tree
    }

    /// Navigation state of any section.
    pub fn navigation(&self, section: NodeId) -> Option<&SectionNavigation> {
        self.tree.navigation(section)
    }

    /// Navigation state of the current section.
    pub fn current_navigation(&self) -> Option<&SectionNavigation> {
        self.tree.current_navigation()
    }

    /// Modal stack of the current section.
    pub fn modal_stack(&self) -> Option<&ModalStack> {
        self.current_navigation().map(SectionNavigation::modal_stack)
    }

    /// The visible screen.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.current_navigation().and_then(SectionNavigation::current_screen)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("config", &self.config)
            .field("location", &self.location.current().to_string())
            .field("routes", &self.registry.len())
            .field("nodes", &self.tree.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ThreadDispatcher;
    use crate::lifecycle::LifecycleEvent;
    use crate::route::DuplicateRoutePolicy;

    struct ModalTestPage;

    impl ScreenType for ModalTestPage {
        fn descriptor() -> ScreenDescriptor {
            ScreenDescriptor::of::<Self>().modal(true)
        }
    }

    fn shell() -> Shell {
        let mut shell = Shell::new();
        shell.register_type::<ModalTestPage>("ModalTestPage").unwrap();
        shell
            .register_route("ContentPage", || ScreenDescriptor::new("ContentPage"))
            .unwrap();
        shell
            .add_item(ShellItem::single(Some("NewRoute"), Some("Section"), Some("Content")))
            .unwrap();
        shell
    }

    /// Runs the job, then drops whatever it returned.
    struct SwallowingDispatcher;

    impl Dispatcher for SwallowingDispatcher {
        fn is_current(&self) -> bool {
            true
        }

        fn invoke(&self, job: &mut crate::dispatch::DispatchJob<'_>) -> Result<(), NavigationError> {
            let _ = job();
            Ok(())
        }
    }

    /// Never runs the job.
    struct DroppingDispatcher;

    impl Dispatcher for DroppingDispatcher {
        fn is_current(&self) -> bool {
            true
        }

        fn invoke(&self, _job: &mut crate::dispatch::DispatchJob<'_>) -> Result<(), NavigationError> {
            Ok(())
        }
    }

    #[test]
    fn empty_shell() {
        let mut shell = Shell::new();
        assert_eq!(shell.current_location().to_string(), "");
        assert!(shell.current().is_none());
        assert_eq!(shell.go_to("Anything").unwrap_err(), NavigationError::EmptyShell);
    }

    #[test]
    fn adding_first_item_publishes_location() {
        let shell = shell();
        assert_eq!(shell.current_location().to_string(), "//NewRoute/Section/Content");
        assert_eq!(shell.current_screen().unwrap().route(), "Content");
        assert_eq!(shell.lifecycle.mounted_count(), 1);
    }

    #[test]
    fn go_to_records_events() {
        let mut shell = shell();
        shell.go_to("ModalTestPage").unwrap();
        let events = shell.events.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            NavigationEvent::Navigating { target, source: NavigationSource::Push, .. } if target == "ModalTestPage"
        ));
        let NavigationEvent::Navigated { previous, current, .. } = &events[1] else {
            panic!("expected Navigated");
        };
        assert_eq!(previous.to_string(), "//NewRoute/Section/Content");
        assert_eq!(current.to_string(), "//NewRoute/Section/Content/ModalTestPage");
    }

    #[test]
    fn failed_navigation_records_nothing() {
        let mut shell = shell();
        shell.lifecycle.pending_events();
        let before = shell.current_location();
        assert!(shell.go_to("Missing").is_err());
        assert!(shell.go_to("a//b").is_err());
        assert!(shell.events.is_empty());
        assert!(!shell.lifecycle.has_pending());
        assert_eq!(shell.current_location(), before);
    }

    #[test]
    fn global_and_hierarchy_routes_conflict() {
        let mut shell = shell();
        let err = shell
            .register_route("Section", || ScreenDescriptor::new("X"))
            .unwrap_err();
        assert!(matches!(err, NavigationError::RouteConflict { .. }));

        let err = shell
            .add_item(ShellItem::single(Some("ContentPage"), None, None))
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::RouteConflict {
                route: "ContentPage".into(),
                scope: "route registry",
            }
        );
    }

    #[test]
    fn duplicate_policy_from_config() {
        let mut shell = shell();
        assert_eq!(
            shell.register_route("ContentPage", || ScreenDescriptor::new("Other")),
            Err(NavigationError::DuplicateRoute { route: "ContentPage".into() })
        );

        let mut shell = Shell::with_config(ShellConfig::new().with_duplicate_routes(DuplicateRoutePolicy::Replace));
        shell.register_route("Page", || ScreenDescriptor::new("A")).unwrap();
        shell.register_route("Page", || ScreenDescriptor::new("B")).unwrap();
        assert_eq!(shell.registry().resolve("Page").unwrap().descriptor().type_name, "B");
    }

    #[test]
    fn pop_operations() {
        let mut shell = shell();
        shell.go_to("ContentPage/ModalTestPage/ContentPage").unwrap();
        shell.pop().unwrap();
        assert_eq!(
            shell.current_location().to_string(),
            "//NewRoute/Section/Content/ContentPage/ModalTestPage"
        );
        shell.pop_modal().unwrap();
        assert_eq!(shell.current_location().to_string(), "//NewRoute/Section/Content/ContentPage");
        assert_eq!(shell.pop_modal().unwrap_err(), NavigationError::EmptyStackPop);

        shell.go_to("ModalTestPage").unwrap();
        shell.pop_to_root().unwrap();
        assert_eq!(shell.current_location().to_string(), "//NewRoute/Section/Content");
        let last = shell.events.drain().pop().unwrap();
        assert_eq!(last.source(), NavigationSource::PopToRoot);
    }

    #[test]
    fn swallowed_error_still_surfaces() {
        let mut shell = shell().with_dispatcher(SwallowingDispatcher);
        shell
            .register_route("SomeCustomPage", || {
                ScreenDescriptor::new("SomeCustomPage").modal(true).hosts_stack(false)
            })
            .unwrap();
        let err = shell.go_to("SomeCustomPage/ContentPage").unwrap_err();
        assert_eq!(
            err,
            NavigationError::NonNavigableTarget {
                host: "SomeCustomPage".into(),
                route: "ContentPage".into(),
            }
        );
        assert!(shell.modal_stack().unwrap().is_empty());
    }

    #[test]
    fn dropped_job_is_reported() {
        let mut shell = shell().with_dispatcher(DroppingDispatcher);
        assert_eq!(shell.go_to("ModalTestPage").unwrap_err(), NavigationError::DispatchDropped);
        assert!(shell.modal_stack().unwrap().is_empty());
    }

    #[test]
    fn off_context_commit_fails() {
        let shell = shell().with_dispatcher(ThreadDispatcher::current());
        let (result, location) = std::thread::spawn(move || {
            let mut shell = shell;
            let result = shell.go_to("ModalTestPage");
            (result, shell.current_location().to_string())
        })
        .join()
        .unwrap();
        assert_eq!(result, Err(NavigationError::OffContext));
        assert_eq!(location, "//NewRoute/Section/Content");
    }

    #[test]
    fn lifecycle_follows_navigation() {
        let mut shell = shell();
        shell.lifecycle.pending_events();
        shell.go_to("ContentPage").unwrap();
        let pushed = shell.current_screen().unwrap().id();
        let events = shell.lifecycle.pending_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], LifecycleEvent::Mount { screen: pushed });
        assert_eq!(events[2], LifecycleEvent::Appearing { screen: pushed });

        shell.pop().unwrap();
        assert!(!shell.lifecycle.is_mounted(pushed));
    }

    #[test]
    fn subscribers_see_changes() {
        let mut shell = shell();
        let mut rx = shell.subscribe_location();
        shell.go_to("ModalTestPage").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().to_string(),
            "//NewRoute/Section/Content/ModalTestPage"
        );
    }
}
