//! The Item → Section → Content hierarchy, arena-backed with slotmap.

pub mod builder;
pub mod current;
pub mod node;
pub mod tree;

pub use builder::{ShellContent, ShellItem, ShellSection};
pub use current::{CurrentPath, DefaultSelection, HierarchySwitch};
pub use node::{NodeData, NodeId, NodeKind};
pub use tree::{PendingNodes, ShellTree};
