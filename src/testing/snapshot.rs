//! Snapshot rendering helpers.
//!
//! Functions for converting shell state (hierarchy, stacks, modal contexts)
//! into plain-text strings suitable for snapshot testing and assertions.

use crate::hierarchy::{NodeKind, ShellTree};
use crate::navigation::{NavigationStack, SectionNavigation};
use crate::screen::Screen;
use crate::shell::Shell;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a whole shell as text.
///
/// The first line is the location. Then every node follows, indented by level
/// and marked `*` when current or `-` otherwise. Sections list their stack
/// and each modal context underneath. Lines are separated by `'\n'`, with no
/// trailing newline.
///
/// ```text
/// location: //NewRoute/Section/Content/ModalTestPage
/// * item NewRoute
///   * section Section
///     stack: Content
///     modal 0: ModalTestPage
///     * content Content
/// ```
pub fn shell_to_string(shell: &Shell) -> String {
    let mut lines = vec![format!("location: {}", shell.current_location())];
    lines.extend(tree_lines(shell.tree()));
    lines.join("\n")
}

/// Render a navigation stack as `root > ... > top`.
pub fn stack_to_string(stack: &NavigationStack) -> String {
    routes_joined(stack.iter())
}

/// Render one section's stack and modal contexts, one per line.
pub fn section_to_string(navigation: &SectionNavigation) -> String {
    section_lines(navigation, "").join("\n")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn tree_lines(tree: &ShellTree) -> Vec<String> {
    let current = tree.current();
    let mut lines = Vec::new();
    for id in tree.walk() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let depth = match node.kind {
            NodeKind::Item => 0,
            NodeKind::Section => 1,
            NodeKind::Content => 2,
        };
        let indent = "  ".repeat(depth);
        let marker = if current.map(|c| c.get(node.kind)) == Some(id) {
            '*'
        } else {
            '-'
        };
        let suffix = if node.implicit { " (implicit)" } else { "" };
        lines.push(format!("{indent}{marker} {} {}{suffix}", node.kind, node.route));

        if node.kind == NodeKind::Section {
            if let Some(nav) = tree.navigation(id) {
                lines.extend(section_lines(nav, &"  ".repeat(depth + 1)));
            }
        }
    }
    lines
}

fn section_lines(navigation: &SectionNavigation, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if !navigation.navigation_stack().is_empty() {
        lines.push(format!(
            "{indent}stack: {}",
            stack_to_string(navigation.navigation_stack())
        ));
    }
    for (i, context) in navigation.modal_stack().iter().enumerate() {
        lines.push(format!(
            "{indent}modal {i}: {}",
            stack_to_string(context.navigation())
        ));
    }
    lines
}

fn routes_joined<'a>(screens: impl Iterator<Item = &'a Screen>) -> String {
    screens.map(Screen::route).collect::<Vec<_>>().join(" > ")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::ShellItem;
    use crate::screen::ScreenDescriptor;

    fn shell() -> Shell {
        let mut shell = Shell::new();
        shell
            .register_route("ModalTestPage", || ScreenDescriptor::new("ModalTestPage").modal(true))
            .unwrap();
        shell
            .register_route("ContentPage", || ScreenDescriptor::new("ContentPage"))
            .unwrap();
        shell
            .add_item(ShellItem::single(Some("NewRoute"), Some("Section"), Some("Content")))
            .unwrap();
        shell
    }

    #[test]
    fn fresh_shell() {
        let shell = shell();
        assert_eq!(
            shell_to_string(&shell),
            "location: //NewRoute/Section/Content\n\
             * item NewRoute\n  \
             * section Section\n    \
             stack: Content\n    \
             * content Content"
        );
    }

    #[test]
    fn modal_contexts_listed_in_order() {
        let mut shell = shell();
        shell.go_to("ContentPage/ModalTestPage/ContentPage").unwrap();
        let nav = shell.current_navigation().unwrap();
        assert_eq!(
            section_to_string(nav),
            "stack: Content > ContentPage\nmodal 0: ModalTestPage > ContentPage"
        );
    }

    #[test]
    fn non_current_and_implicit_nodes_are_marked() {
        let mut shell = shell();
        shell
            .add_content(crate::hierarchy::ShellContent::new().with_route("Feed"))
            .unwrap();
        let text = shell_to_string(&shell);
        assert!(text.contains("- item IMPL_IMPL_Feed (implicit)"));
        assert!(text.contains("    - content Feed"));
    }

    #[test]
    fn empty_shell_has_blank_location() {
        assert_eq!(shell_to_string(&Shell::new()), "location: ");
    }
}
