//! Per-section navigation state: the section stack plus its modal stack.

use crate::error::NavigationError;
use crate::hierarchy::NodeId;
use crate::navigation::modal::{ModalContext, ModalStack};
use crate::navigation::stack::NavigationStack;
use crate::screen::{Screen, ScreenId};

/// Navigation state owned by one section.
///
/// The bottom of `stack` is always the root screen of the content recorded in
/// `content`. Modal contexts, when present, sit above the section stack and
/// receive every push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionNavigation {
    stack: NavigationStack,
    modal: ModalStack,
    content: Option<NodeId>,
}

impl SectionNavigation {
    /// Create empty navigation state (no root installed yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// The section's own stack, root first.
    pub fn navigation_stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Modal contexts presented over the section.
    pub fn modal_stack(&self) -> &ModalStack {
        &self.modal
    }

    /// The content whose root screen sits at the bottom of the stack.
    pub fn content(&self) -> Option<NodeId> {
        self.content
    }

    /// The stack that receives pushes: the top modal context's, or the section's.
    pub fn effective_stack(&self) -> &NavigationStack {
        self.modal
            .peek()
            .map(ModalContext::navigation)
            .unwrap_or(&self.stack)
    }

    /// The visible screen.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.effective_stack().peek()
    }

    /// Routes that appear in the location: the section stack above its root,
    /// then every modal context's full stack.
    pub fn location_segments(&self) -> impl Iterator<Item = &str> {
        self.stack
            .above_root()
            .iter()
            .chain(self.modal.screens())
            .map(Screen::route)
    }

    /// Ids of every screen held by this section, section stack first.
    pub fn screen_ids(&self) -> Vec<ScreenId> {
        self.stack
            .iter()
            .chain(self.modal.screens())
            .map(Screen::id)
            .collect()
    }

    // ── Mutation (crate-internal; driven by the engine) ──────────────

    /// Install `root` as the stack root for `content`, discarding the old stack.
    pub(crate) fn install_root(&mut self, content: NodeId, root: Screen) {
        self.stack.replace([root]);
        self.content = Some(content);
    }

    /// Keep only the root of the section stack.
    pub(crate) fn truncate_to_root(&mut self) {
        self.stack.pop_to_root();
    }

    /// Push onto the effective stack.
    pub(crate) fn push(&mut self, screen: Screen) -> Result<(), NavigationError> {
        let target = match self.modal.peek_mut() {
            Some(context) => context.navigation_mut(),
            None => &mut self.stack,
        };
        push_hosted(target, screen)
    }

    /// Open a new modal context from a run: `run[0]` is the modal root, the
    /// rest are pushed into it.
    pub(crate) fn present(&mut self, run: Vec<Screen>) -> Result<(), NavigationError> {
        let mut screens = run.into_iter();
        let Some(root) = screens.next() else {
            return Ok(());
        };
        let mut context = ModalContext::new(root);
        for screen in screens {
            push_hosted(context.navigation_mut(), screen)?;
        }
        self.modal.push(context);
        Ok(())
    }

    /// Pop the visible screen. A modal context left with only its root is
    /// dismissed as a whole.
    pub(crate) fn pop(&mut self) -> Result<(), NavigationError> {
        if let Some(context) = self.modal.peek_mut() {
            if context.navigation_mut().pop().is_err() {
                self.modal.pop();
            }
            return Ok(());
        }
        self.stack.pop().map(drop)
    }

    /// Dismiss the top modal context.
    pub(crate) fn pop_modal(&mut self) -> Result<ModalContext, NavigationError> {
        self.modal.pop().ok_or(NavigationError::EmptyStackPop)
    }

    /// Dismiss every modal context.
    pub(crate) fn dismiss_modals(&mut self) -> Vec<ModalContext> {
        self.modal.pop_all()
    }
}

/// Push `screen` onto `stack`, provided the stack's root can host it.
fn push_hosted(stack: &mut NavigationStack, screen: Screen) -> Result<(), NavigationError> {
    if let Some(host) = stack.root() {
        if !host.hosts_stack() {
            return Err(NavigationError::NonNavigableTarget {
                host: host.type_name().to_string(),
                route: screen.route().to_string(),
            });
        }
    }
    stack.push(screen);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenDescriptor;
    use slotmap::SlotMap;

    fn content_id() -> NodeId {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        sm.insert(())
    }

    fn page(route: &str) -> Screen {
        Screen::new(route, ScreenDescriptor::new("ContentPage"))
    }

    fn modal(route: &str) -> Screen {
        Screen::new(route, ScreenDescriptor::new(route).modal(true))
    }

    fn section() -> SectionNavigation {
        let mut nav = SectionNavigation::new();
        nav.install_root(content_id(), page("Content"));
        nav
    }

    #[test]
    fn install_root_sets_content() {
        let nav = section();
        assert!(nav.content().is_some());
        assert_eq!(nav.navigation_stack().len(), 1);
        assert_eq!(nav.current_screen().unwrap().route(), "Content");
        assert_eq!(nav.location_segments().count(), 0);
    }

    #[test]
    fn push_targets_section_without_modals() {
        let mut nav = section();
        nav.push(page("A")).unwrap();
        assert_eq!(nav.navigation_stack().len(), 2);
        assert_eq!(nav.current_screen().unwrap().route(), "A");
    }

    #[test]
    fn push_targets_top_modal_context() {
        let mut nav = section();
        nav.present(vec![modal("ModalTestPage")]).unwrap();
        nav.push(page("ContentPage")).unwrap();
        assert_eq!(nav.navigation_stack().len(), 1);
        assert_eq!(nav.modal_stack()[0].navigation().len(), 2);
        assert_eq!(
            nav.location_segments().collect::<Vec<_>>(),
            vec!["ModalTestPage", "ContentPage"]
        );
    }

    #[test]
    fn present_run_rooted_at_modal() {
        let mut nav = section();
        nav.present(vec![modal("ModalTestPage2"), page("ContentPage")])
            .unwrap();
        let ctx = &nav.modal_stack()[0];
        assert_eq!(ctx.root().unwrap().route(), "ModalTestPage2");
        assert_eq!(ctx.navigation().peek().unwrap().route(), "ContentPage");
    }

    #[test]
    fn present_onto_non_navigable_root_fails() {
        let mut nav = section();
        let custom = Screen::new(
            "SomeCustomPage",
            ScreenDescriptor::new("SomeCustomPage").modal(true).hosts_stack(false),
        );
        let err = nav.present(vec![custom, page("ContentPage")]).unwrap_err();
        assert_eq!(
            err,
            NavigationError::NonNavigableTarget {
                host: "SomeCustomPage".into(),
                route: "ContentPage".into(),
            }
        );
        assert!(nav.modal_stack().is_empty());
    }

    #[test]
    fn push_onto_non_navigable_section_root_fails() {
        let mut nav = SectionNavigation::new();
        nav.install_root(
            content_id(),
            Screen::new("Content", ScreenDescriptor::new("Plain").hosts_stack(false)),
        );
        assert!(matches!(
            nav.push(page("A")),
            Err(NavigationError::NonNavigableTarget { .. })
        ));
    }

    #[test]
    fn pop_walks_down_through_modals() {
        let mut nav = section();
        nav.push(page("A")).unwrap();
        nav.present(vec![modal("M"), page("B")]).unwrap();

        nav.pop().unwrap(); // B
        assert_eq!(nav.current_screen().unwrap().route(), "M");
        nav.pop().unwrap(); // dismisses M's context
        assert!(nav.modal_stack().is_empty());
        nav.pop().unwrap(); // A
        assert_eq!(nav.pop().unwrap_err(), NavigationError::EmptyStackPop);
    }

    #[test]
    fn pop_modal_and_dismiss() {
        let mut nav = section();
        assert_eq!(nav.pop_modal().unwrap_err(), NavigationError::EmptyStackPop);
        nav.present(vec![modal("M1")]).unwrap();
        nav.present(vec![modal("M2")]).unwrap();
        let top = nav.pop_modal().unwrap();
        assert_eq!(top.root().unwrap().route(), "M2");
        nav.present(vec![modal("M3")]).unwrap();
        assert_eq!(nav.dismiss_modals().len(), 2);
        assert!(nav.modal_stack().is_empty());
    }

    #[test]
    fn screen_ids_cover_all_stacks() {
        let mut nav = section();
        nav.push(page("A")).unwrap();
        nav.present(vec![modal("M")]).unwrap();
        assert_eq!(nav.screen_ids().len(), 3);
    }

    #[test]
    fn truncate_keeps_root() {
        let mut nav = section();
        nav.push(page("A")).unwrap();
        nav.truncate_to_root();
        assert_eq!(nav.navigation_stack().len(), 1);
    }
}
