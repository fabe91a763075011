//! Current-selection tracking: the active Item/Section/Content triple.

use super::node::{NodeId, NodeKind};

/// The three "current" pointers, always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrentPath {
    pub item: NodeId,
    pub section: NodeId,
    pub content: NodeId,
}

impl CurrentPath {
    pub fn new(item: NodeId, section: NodeId, content: NodeId) -> Self {
        Self {
            item,
            section,
            content,
        }
    }

    /// The pointer for one level.
    pub fn get(&self, kind: NodeKind) -> NodeId {
        match kind {
            NodeKind::Item => self.item,
            NodeKind::Section => self.section,
            NodeKind::Content => self.content,
        }
    }

    /// The highest level at which `next` differs from `self`.
    pub fn switch_to(&self, next: &CurrentPath) -> HierarchySwitch {
        if self.item != next.item {
            HierarchySwitch::Item
        } else if self.section != next.section {
            HierarchySwitch::Section
        } else if self.content != next.content {
            HierarchySwitch::Content
        } else {
            HierarchySwitch::None
        }
    }
}

/// Highest hierarchy level changed by a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HierarchySwitch {
    #[default]
    None,
    Content,
    Section,
    Item,
}

impl HierarchySwitch {
    /// Whether any pointer changed.
    pub fn is_switch(self) -> bool {
        self != HierarchySwitch::None
    }

    /// Whether the current section (and with it the navigation state) changed.
    pub fn changes_section(self) -> bool {
        matches!(self, HierarchySwitch::Section | HierarchySwitch::Item)
    }
}

/// Which child fills a level an absolute path leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultSelection {
    /// The first declared child.
    #[default]
    FirstDeclared,
    /// The child last selected under that parent (the current item at the
    /// top level).
    Current,
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| sm.insert(())).collect()
    }

    #[test]
    fn same_triple_is_no_switch() {
        let ids = ids(3);
        let path = CurrentPath::new(ids[0], ids[1], ids[2]);
        assert_eq!(path.switch_to(&path), HierarchySwitch::None);
        assert!(!HierarchySwitch::None.is_switch());
    }

    #[test]
    fn highest_changed_level_wins() {
        let ids = ids(6);
        let path = CurrentPath::new(ids[0], ids[1], ids[2]);

        let content = CurrentPath::new(ids[0], ids[1], ids[5]);
        assert_eq!(path.switch_to(&content), HierarchySwitch::Content);
        assert!(!HierarchySwitch::Content.changes_section());

        let section = CurrentPath::new(ids[0], ids[4], ids[5]);
        assert_eq!(path.switch_to(&section), HierarchySwitch::Section);
        assert!(HierarchySwitch::Section.changes_section());

        let item = CurrentPath::new(ids[3], ids[4], ids[5]);
        assert_eq!(path.switch_to(&item), HierarchySwitch::Item);
    }

    #[test]
    fn get_by_kind() {
        let ids = ids(3);
        let path = CurrentPath::new(ids[0], ids[1], ids[2]);
        assert_eq!(path.get(NodeKind::Item), ids[0]);
        assert_eq!(path.get(NodeKind::Section), ids[1]);
        assert_eq!(path.get(NodeKind::Content), ids[2]);
    }

    #[test]
    fn default_selection_is_first_declared() {
        assert_eq!(DefaultSelection::default(), DefaultSelection::FirstDeclared);
    }
}
