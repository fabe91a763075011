//! Route registry: route name -> screen factory.
//!
//! Names are matched as exact path segments; there is no wildcard or
//! parameter matching.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::NavigationError;
use crate::screen::{Screen, ScreenDescriptor, ScreenType};

/// Factory that produces the descriptor for a fresh screen instance.
pub type ScreenFactory = Arc<dyn Fn() -> ScreenDescriptor + Send + Sync>;

// ---------------------------------------------------------------------------
// DuplicateRoutePolicy
// ---------------------------------------------------------------------------

/// What [`RouteRegistry::register`] does when the name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateRoutePolicy {
    /// Fail with [`NavigationError::DuplicateRoute`].
    #[default]
    Reject,
    /// Overwrite the existing entry.
    Replace,
}

// ---------------------------------------------------------------------------
// RouteEntry
// ---------------------------------------------------------------------------

/// A registered route.
#[derive(Clone)]
pub struct RouteEntry {
    name: String,
    factory: ScreenFactory,
}

impl RouteEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the factory.
    pub fn descriptor(&self) -> ScreenDescriptor {
        (self.factory)()
    }

    /// Run the factory and wrap the result in a new [`Screen`].
    pub fn instantiate(&self) -> Screen {
        Screen::new(self.name.clone(), self.descriptor())
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("name", &self.name)
            .field("factory", &"<fn>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RouteRegistry
// ---------------------------------------------------------------------------

/// Registry of global screen routes.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: HashMap<String, RouteEntry>,
    policy: DuplicateRoutePolicy,
}

impl RouteRegistry {
    /// Create an empty registry that rejects duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given duplicate policy.
    pub fn with_policy(policy: DuplicateRoutePolicy) -> Self {
        Self {
            routes: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicateRoutePolicy {
        self.policy
    }

    /// Register `name` with a descriptor factory.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), NavigationError>
    where
        F: Fn() -> ScreenDescriptor + Send + Sync + 'static,
    {
        let name = name.into();
        validate_route_name(&name)?;
        if self.routes.contains_key(&name) && self.policy == DuplicateRoutePolicy::Reject {
            return Err(NavigationError::DuplicateRoute { route: name });
        }
        let entry = RouteEntry {
            name: name.clone(),
            factory: Arc::new(factory),
        };
        if self.routes.insert(name.clone(), entry).is_some() {
            tracing::debug!(route = %name, "replaced route");
        } else {
            tracing::debug!(route = %name, "registered route");
        }
        Ok(())
    }

    /// Register `name` for the screen type `T`.
    pub fn register_type<T: ScreenType>(&mut self, name: impl Into<String>) -> Result<(), NavigationError> {
        self.register(name, T::descriptor)
    }

    /// Look up a route. Fails with [`NavigationError::UnknownRoute`] if absent.
    pub fn resolve(&self, name: &str) -> Result<&RouteEntry, NavigationError> {
        self.routes
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRoute {
                route: name.to_string(),
            })
    }

    /// Resolve and instantiate a route in one step.
    pub fn instantiate(&self, name: &str) -> Result<Screen, NavigationError> {
        self.resolve(name).map(RouteEntry::instantiate)
    }

    /// Remove a route, returning its entry.
    pub fn unregister(&mut self, name: &str) -> Option<RouteEntry> {
        self.routes.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Check that `name` can be used as a single path segment.
pub(crate) fn validate_route_name(name: &str) -> Result<(), NavigationError> {
    let reason = if name.is_empty() {
        "route names cannot be empty"
    } else if name == ".." {
        "`..` is reserved for popping"
    } else if name.contains('/') {
        "route names cannot contain `/`"
    } else if name.chars().any(char::is_whitespace) {
        "route names cannot contain whitespace"
    } else {
        return Ok(());
    };
    Err(NavigationError::InvalidRouteName {
        route: name.to_string(),
        reason,
    })
}
