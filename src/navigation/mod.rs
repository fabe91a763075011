//! Navigation stacks: section stacks, modal contexts, per-section state.

pub mod modal;
pub mod section;
pub mod stack;

pub use modal::{ModalContext, ModalStack};
pub use section::SectionNavigation;
pub use stack::NavigationStack;
