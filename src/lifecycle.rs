use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

type Release = Box<dyn FnOnce() + Send>;

/// A listener or timer owned by a mounted view.
///
/// The release action runs exactly once: on the first [`Subscription::release`]
/// call, or when the guard is dropped, whichever comes first.
pub struct Subscription {
    name: &'static str,
    release: Option<Release>,
}

impl Subscription {
    pub fn new(name: &'static str, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            name,
            release: Some(Box::new(release)),
        }
    }

    /// Nothing to release.
    pub fn inactive(name: &'static str) -> Self {
        Self {
            name,
            release: None,
        }
    }

    /// Own a background task. Releasing raises `stop` before aborting, so a
    /// task checking the flag never acts after release even if it is being
    /// polled at that moment.
    pub fn timer(name: &'static str, handle: JoinHandle<()>, stop: Arc<AtomicBool>) -> Self {
        Self::new(name, move || {
            stop.store(true, Ordering::Release);
            handle.abort();
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Returns `true` if this call performed the release.
    pub fn release(&mut self) -> bool {
        match self.release.take() {
            Some(release) => {
                release();
                tracing::debug!(subscription = self.name, "released");
                true
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("active", &self.is_active())
            .finish()
    }
}
