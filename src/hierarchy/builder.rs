//! Declarative builders for the Item → Section → Content hierarchy.
//!
//! ```ignore
//! let item = ShellItem::new()
//!     .with_route("NewRoute")
//!     .with_section(
//!         ShellSection::new()
//!             .with_route("Section")
//!             .with_content(ShellContent::new().with_route("Content")),
//!     );
//! shell.add_item(item)?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::route::ScreenFactory;
use crate::screen::{ScreenDescriptor, ScreenType};

// ---------------------------------------------------------------------------
// ShellContent
// ---------------------------------------------------------------------------

/// A content leaf. Its root screen becomes the bottom of the section stack.
#[derive(Clone, Default)]
pub struct ShellContent {
    pub(crate) route: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) root: Option<ScreenFactory>,
}

impl ShellContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route (builder). Unset routes get a `D_FAULT_` default.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the root screen factory (builder).
    pub fn with_root<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> ScreenDescriptor + Send + Sync + 'static,
    {
        self.root = Some(Arc::new(factory));
        self
    }

    /// Use the screen type `T` as the root (builder).
    pub fn with_root_type<T: ScreenType>(self) -> Self {
        self.with_root(T::descriptor)
    }
}

impl fmt::Debug for ShellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellContent")
            .field("route", &self.route)
            .field("title", &self.title)
            .field("root", &self.root.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ShellSection
// ---------------------------------------------------------------------------

/// A section: owns one navigation stack shared by its contents.
#[derive(Debug, Clone, Default)]
pub struct ShellSection {
    pub(crate) route: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) contents: Vec<ShellContent>,
}

impl ShellSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route (builder).
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a content (builder).
    pub fn with_content(mut self, content: ShellContent) -> Self {
        self.contents.push(content);
        self
    }
}

// ---------------------------------------------------------------------------
// ShellItem
// ---------------------------------------------------------------------------

/// A top-level item.
#[derive(Debug, Clone, Default)]
pub struct ShellItem {
    pub(crate) route: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) sections: Vec<ShellSection>,
}

impl ShellItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route (builder).
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a section (builder).
    pub fn with_section(mut self, section: ShellSection) -> Self {
        self.sections.push(section);
        self
    }

    /// A complete item with one section holding one content, each with an
    /// optional route.
    pub fn single(item: Option<&str>, section: Option<&str>, content: Option<&str>) -> Self {
        let mut shell_content = ShellContent::new();
        if let Some(route) = content {
            shell_content = shell_content.with_route(route);
        }
        let mut shell_section = ShellSection::new().with_content(shell_content);
        if let Some(route) = section {
            shell_section = shell_section.with_route(route);
        }
        let mut shell_item = ShellItem::new().with_section(shell_section);
        if let Some(route) = item {
            shell_item = shell_item.with_route(route);
        }
        shell_item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FeedPage;

    impl ScreenType for FeedPage {}

    #[test]
    fn builders_chain() {
        let item = ShellItem::new()
            .with_route("Main")
            .with_title("Main")
            .with_section(
                ShellSection::new()
                    .with_route("Tabs")
                    .with_content(ShellContent::new().with_route("Home"))
                    .with_content(ShellContent::new().with_route("Settings")),
            );
        assert_eq!(item.route.as_deref(), Some("Main"));
        assert_eq!(item.sections.len(), 1);
        assert_eq!(item.sections[0].contents.len(), 2);
        assert_eq!(item.sections[0].contents[1].route.as_deref(), Some("Settings"));
    }

    #[test]
    fn single_builds_full_chain() {
        let item = ShellItem::single(Some("NewRoute"), None, Some("Content"));
        assert_eq!(item.route.as_deref(), Some("NewRoute"));
        assert!(item.sections[0].route.is_none());
        assert_eq!(item.sections[0].contents[0].route.as_deref(), Some("Content"));
    }

    #[test]
    fn root_type_sets_factory() {
        let content = ShellContent::new().with_root_type::<FeedPage>();
        let factory = content.root.as_ref().unwrap();
        assert_eq!(factory().type_name, "FeedPage");
        assert!(format!("{content:?}").contains("<fn>"));
    }
}
