//! Async front end: a tokio task owns the shell and serves requests in order.

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

use super::Shell;
use crate::error::NavigationError;
use crate::location::ShellLocation;

type Reply<T> = oneshot::Sender<Result<T, NavigationError>>;

enum Request {
    GoTo { path: String, reply: Reply<ShellLocation> },
    Pop { reply: Reply<ShellLocation> },
    PopModal { reply: Reply<ShellLocation> },
    PopToRoot { reply: Reply<ShellLocation> },
    Shutdown { reply: oneshot::Sender<Shell> },
}

/// Cloneable handle to a shell running in its own task.
///
/// Requests are queued on a bounded channel and served one at a time, so
/// navigations from different tasks never interleave.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    sender: mpsc::Sender<Request>,
    location: watch::Receiver<ShellLocation>,
}

impl ShellHandle {
    pub(crate) fn spawn(shell: Shell) -> Result<Self, NavigationError> {
        let runtime = Handle::try_current().map_err(|_| NavigationError::NoRuntime)?;
        let (sender, receiver) = mpsc::channel(shell.config().request_buffer.max(1));
        let location = shell.subscribe_location();
        runtime.spawn(serve(shell, receiver));
        Ok(Self { sender, location })
    }

    /// Navigate to `path`; resolves to the new location.
    pub async fn go_to(&self, path: impl Into<String>) -> Result<ShellLocation, NavigationError> {
        let path = path.into();
        self.request(|reply| Request::GoTo { path, reply }).await
    }

    /// Pop the visible screen.
    pub async fn pop(&self) -> Result<ShellLocation, NavigationError> {
        self.request(|reply| Request::Pop { reply }).await
    }

    /// Dismiss the top modal context.
    pub async fn pop_modal(&self) -> Result<ShellLocation, NavigationError> {
        self.request(|reply| Request::PopModal { reply }).await
    }

    /// Reset the current section to its root.
    pub async fn pop_to_root(&self) -> Result<ShellLocation, NavigationError> {
        self.request(|reply| Request::PopToRoot { reply }).await
    }

    /// The latest published location, without a round trip to the task.
    pub fn current_location(&self) -> ShellLocation {
        self.location.borrow().clone()
    }

    /// A receiver woken on every location change.
    pub fn subscribe_location(&self) -> watch::Receiver<ShellLocation> {
        self.location.clone()
    }

    /// Stop the task and take the shell back. Requests queued before this
    /// one are served first.
    pub async fn shutdown(self) -> Result<Shell, NavigationError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Request::Shutdown { reply })
            .await
            .map_err(|_| NavigationError::ShellClosed)?;
        response.await.map_err(|_| NavigationError::ShellClosed)
    }

    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> Request) -> Result<T, NavigationError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(build(reply))
            .await
            .map_err(|_| NavigationError::ShellClosed)?;
        response.await.map_err(|_| NavigationError::ShellClosed)?
    }
}

async fn serve(mut shell: Shell, mut receiver: mpsc::Receiver<Request>) {
    debug!("shell task started");
    while let Some(request) = receiver.recv().await {
        match request {
            Request::GoTo { path, reply } => {
                let result = shell.go_to(&path).map(|()| shell.current_location());
                let _ = reply.send(result);
            }
            Request::Pop { reply } => {
                let result = shell.pop().map(|()| shell.current_location());
                let _ = reply.send(result);
            }
            Request::PopModal { reply } => {
                let result = shell.pop_modal().map(|()| shell.current_location());
                let _ = reply.send(result);
            }
            Request::PopToRoot { reply } => {
                let result = shell.pop_to_root().map(|()| shell.current_location());
                let _ = reply.send(result);
            }
            Request::Shutdown { reply } => {
                debug!("shell task shutting down");
                let _ = reply.send(shell);
                return;
            }
        }
    }
    debug!("all handles dropped, shell task exiting");
}
