//! Routes: registry of screen factories and the path grammar.

pub mod path;
pub mod registry;
pub mod tokenizer;

pub use path::{PathError, PathKind, PathSegment, RoutePath};
pub use registry::{DuplicateRoutePolicy, RouteEntry, RouteRegistry, ScreenFactory};
