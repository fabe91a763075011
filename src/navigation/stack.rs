//! Navigation stack: ordered screens, visible screen last.

use crate::error::NavigationError;
use crate::screen::Screen;

/// An ordered sequence of screens. The bottom screen is the root and is never
/// removed by [`pop`](NavigationStack::pop).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    screens: Vec<Screen>,
}

impl NavigationStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack holding only `root`.
    pub fn with_root(root: Screen) -> Self {
        Self {
            screens: vec![root],
        }
    }

    /// Push a screen on top.
    pub fn push(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    /// Pop the top screen.
    ///
    /// Fails with [`NavigationError::EmptyStackPop`] when only the root (or
    /// nothing) is left.
    pub fn pop(&mut self) -> Result<Screen, NavigationError> {
        if self.screens.len() <= 1 {
            return Err(NavigationError::EmptyStackPop);
        }
        self.screens.pop().ok_or(NavigationError::EmptyStackPop)
    }

    /// Remove every screen above the root, returning them bottom-up.
    pub fn pop_to_root(&mut self) -> Vec<Screen> {
        if self.screens.len() <= 1 {
            return Vec::new();
        }
        self.screens.split_off(1)
    }

    /// Replace the whole stack with `screens`.
    pub fn replace(&mut self, screens: impl IntoIterator<Item = Screen>) -> Vec<Screen> {
        std::mem::replace(&mut self.screens, screens.into_iter().collect())
    }

    /// The visible (top) screen.
    pub fn peek(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// The bottom screen.
    pub fn root(&self) -> Option<&Screen> {
        self.screens.first()
    }

    /// All screens, bottom first.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Screens above the root, bottom first.
    pub fn above_root(&self) -> &[Screen] {
        self.screens.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Screen> {
        self.screens.iter()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavigationStack {
    type Item = &'a Screen;
    type IntoIter = std::slice::Iter<'a, Screen>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
