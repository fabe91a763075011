//! Headless testing helpers: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a [`Shell`](crate::shell::Shell) with short
//! setup calls. Use [`shell_to_string`] to capture the hierarchy and stacks
//! as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{section_to_string, shell_to_string, stack_to_string};
