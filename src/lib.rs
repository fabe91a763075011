//! # gilt-nav
//!
//! Hierarchical shell navigation: string route paths resolved into a fixed
//! Item → Section → Content tree, a navigation stack per section, and modal
//! contexts layered on top.
//!
//! The crate keeps navigation state only. Rendering, input and animation
//! belong to the UI layer, which reads the resolved stacks and the
//! [`ShellLocation`](location::ShellLocation) after each navigation.
//!
//! ## Core Systems
//!
//! - **[`route`]**: route registry, path tokenizer and parser
//! - **[`hierarchy`]**: slotmap-backed Item/Section/Content arena with current selection
//! - **[`navigation`]**: section stacks and modal contexts
//! - **[`engine`]**: path → plan → staged commit
//! - **[`shell`]**: the facade, its config and the async handle
//! - **[`dispatch`]**: execution-context boundary for commits
//! - **[`location`]**: canonical location and its watch channel
//! - **[`event`]** / **[`lifecycle`]**: navigation events and screen lifecycle
//! - **[`testing`]**: headless pilot and text snapshots
//!
//! ```ignore
//! use gilt_nav::prelude::*;
//!
//! let mut shell = Shell::new();
//! shell.register_route("Details", || ScreenDescriptor::new("DetailsPage").modal(true))?;
//! shell.add_item(ShellItem::single(Some("Main"), Some("Tabs"), Some("Home")))?;
//! shell.go_to("Details")?;
//! assert_eq!(shell.current_location().to_string(), "//Main/Tabs/Home/Details");
//! ```

// Foundation
pub mod error;
pub mod screen;

// Routes and state
pub mod hierarchy;
pub mod navigation;
pub mod route;

// Navigation
pub mod dispatch;
pub mod engine;
pub mod location;

// Notifications
pub mod event;
pub mod lifecycle;

// Facade
pub mod shell;

// Test support
pub mod testing;

/// The types most callers need.
pub mod prelude {
    pub use crate::dispatch::{Dispatcher, InlineDispatcher, ThreadDispatcher};
    pub use crate::error::{NavigationError, PathError};
    pub use crate::event::{NavigationEvent, NavigationSource};
    pub use crate::hierarchy::{DefaultSelection, ShellContent, ShellItem, ShellSection};
    pub use crate::location::ShellLocation;
    pub use crate::route::DuplicateRoutePolicy;
    pub use crate::screen::{ModalBehavior, ScreenDescriptor, ScreenType};
    pub use crate::shell::{Shell, ShellConfig, ShellHandle};
}

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use gilt_nav_macros::shell;
