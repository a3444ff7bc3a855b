// Favicon collaborator contract. The panel fires a request per rendered row
// and otherwise treats the fetch as opaque: no loading state, no await. The
// returned handle exists so a row slot being reused can cancel the fetch
// that was still targeting it.

use tokio::task::JoinHandle;

/// Resolves an icon for a site and renders it into the requesting row's
/// image slot on its own executor.
pub trait FaviconService: Send + Sync {
    fn request_favicon(&self, site_url: &str) -> FaviconTask;
}

/// Cancellable handle for one in-flight favicon fetch.
///
/// Implementations that resolve synchronously (caches, test doubles) return
/// `FaviconTask::completed()`; cancelling it is a no-op.
pub struct FaviconTask {
    handle: Option<JoinHandle<()>>,
}

impl FaviconTask {
    pub fn spawned(handle: JoinHandle<()>) -> Self {
        FaviconTask {
            handle: Some(handle),
        }
    }

    pub fn completed() -> Self {
        FaviconTask { handle: None }
    }

    /// Abort the fetch if it is still running. Late completions must never
    /// write into a slot that has been handed to another row.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
