//! Navigation error taxonomy.
//!
//! Every fallible operation in the crate returns [`NavigationError`]. Path
//! syntax problems are reported through the nested [`PathError`].

pub use crate::route::path::PathError;

/// Errors raised while registering routes, building the hierarchy, or navigating.
///
/// A failed navigation never leaves partial state behind: the hierarchy, the
/// stacks and the location are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route registered for `{route}`")]
    UnknownRoute { route: String },

    #[error("cannot pop below the root screen")]
    EmptyStackPop,

    #[error("`{host}` cannot host a navigation stack, refusing to push `{route}`")]
    NonNavigableTarget { host: String, route: String },

    #[error("route `{route}` is already registered")]
    DuplicateRoute { route: String },

    #[error("route `{route}` is already used by the {scope}")]
    RouteConflict { route: String, scope: &'static str },

    #[error("invalid route name `{route}`: {reason}")]
    InvalidRouteName { route: String, reason: &'static str },

    #[error("invalid hierarchy: {reason}")]
    InvalidHierarchy { reason: String },

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("shell has no items to navigate")]
    EmptyShell,

    #[error("navigation committed off the shell's execution context")]
    OffContext,

    #[error("dispatcher returned without running the navigation")]
    DispatchDropped,

    #[error("shell task has shut down")]
    ShellClosed,

    #[error("no tokio runtime to spawn the shell task on")]
    NoRuntime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_route() {
        let err = NavigationError::UnknownRoute {
            route: "Details".into(),
        };
        assert_eq!(err.to_string(), "no route registered for `Details`");

        let err = NavigationError::NonNavigableTarget {
            host: "SomeCustomPage".into(),
            route: "ContentPage".into(),
        };
        assert!(err.to_string().contains("SomeCustomPage"));
        assert!(err.to_string().contains("ContentPage"));
    }

    #[test]
    fn path_errors_convert() {
        let err: NavigationError = PathError::Empty.into();
        assert_eq!(err, NavigationError::Path(PathError::Empty));
        assert_eq!(err.to_string(), PathError::Empty.to_string());
    }

    #[test]
    fn errors_are_clone_and_comparable() {
        let err = NavigationError::EmptyStackPop;
        assert_eq!(err.clone(), NavigationError::EmptyStackPop);
    }
}
