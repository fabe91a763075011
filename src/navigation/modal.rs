//! Modal stack: independent navigation contexts presented above a section.

use crate::navigation::stack::NavigationStack;
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// ModalContext
// ---------------------------------------------------------------------------

/// One modal presentation. Its root is the modal screen that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContext {
    stack: NavigationStack,
}

impl ModalContext {
    /// Open a context rooted at `root`.
    pub fn new(root: Screen) -> Self {
        Self {
            stack: NavigationStack::with_root(root),
        }
    }

    /// The context's own navigation stack.
    pub fn navigation(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationStack {
        &mut self.stack
    }

    /// The modal screen that opened this context.
    pub fn root(&self) -> Option<&Screen> {
        self.stack.root()
    }
}

// ---------------------------------------------------------------------------
// ModalStack
// ---------------------------------------------------------------------------

/// Ordered modal contexts, each presented over the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    contexts: Vec<ModalContext>,
}

impl ModalStack {
    /// Create an empty modal stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Present a context on top.
    pub fn push(&mut self, context: ModalContext) {
        self.contexts.push(context);
    }

    /// Dismiss the top context.
    pub fn pop(&mut self) -> Option<ModalContext> {
        self.contexts.pop()
    }

    /// Dismiss every context, returning them bottom-up.
    pub fn pop_all(&mut self) -> Vec<ModalContext> {
        std::mem::take(&mut self.contexts)
    }

    /// The top context.
    pub fn peek(&self) -> Option<&ModalContext> {
        self.contexts.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut ModalContext> {
        self.contexts.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&ModalContext> {
        self.contexts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModalContext> {
        self.contexts.iter()
    }

    /// Every screen across all contexts, in push order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.contexts.iter().flat_map(|c| c.navigation().iter())
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl std::ops::Index<usize> for ModalStack {
    type Output = ModalContext;

    fn index(&self, index: usize) -> &Self::Output {
        &self.contexts[index]
    }
}

impl<'a> IntoIterator for &'a ModalStack {
    type Item = &'a ModalContext;
    type IntoIter = std::slice::Iter<'a, ModalContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
