//! The navigation engine: resolve a path into a plan, then stage the plan
//! on copies of the affected sections.

pub mod plan;
pub mod reconcile;
pub mod resolve;

pub use plan::{NavigationPlan, PlanTarget, PopStep};
pub use reconcile::{stage, StagedCommit};
pub use resolve::resolve;
