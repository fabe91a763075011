//! The execution-context boundary every navigation commit crosses.
//!
//! A [`Dispatcher`] decides where the commit job runs. The shell never trusts
//! the dispatcher to report the job's outcome: the job writes its result into
//! a slot the shell owns, and that slot is checked after `invoke` returns. A
//! dispatcher that swallows errors therefore cannot hide a failed commit.

use std::fmt;
use std::thread::{self, ThreadId};

use crate::error::NavigationError;

/// The commit job handed to a dispatcher.
pub type DispatchJob<'a> = dyn FnMut() -> Result<(), NavigationError> + 'a;

/// Runs navigation commits on the shell's execution context.
pub trait Dispatcher: Send + Sync {
    /// Whether the caller is on the context this dispatcher serves.
    fn is_current(&self) -> bool;

    /// Run `job` on the owning context.
    ///
    /// Implementations return `OffContext` when the job cannot run from
    /// here. Whatever they return, the shell reads the job's own result.
    fn invoke(&self, job: &mut DispatchJob<'_>) -> Result<(), NavigationError>;
}

// ---------------------------------------------------------------------------
// InlineDispatcher
// ---------------------------------------------------------------------------

/// Runs every job immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn is_current(&self) -> bool {
        true
    }

    fn invoke(&self, job: &mut DispatchJob<'_>) -> Result<(), NavigationError> {
        job()
    }
}

// ---------------------------------------------------------------------------
// ThreadDispatcher
// ---------------------------------------------------------------------------

/// Bound to one thread; refuses jobs from any other.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ThreadDispatcher {
    owner: ThreadId,
}

impl ThreadDispatcher {
    /// Bind to the calling thread.
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }
}

impl fmt::Debug for ThreadDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadDispatcher")
            .field("owner", &self.owner)
            .finish()
    }
}

impl Dispatcher for ThreadDispatcher {
    fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    fn invoke(&self, job: &mut DispatchJob<'_>) -> Result<(), NavigationError> {
        if !self.is_current() {
            return Err(NavigationError::OffContext);
        }
        job()
    }
}
