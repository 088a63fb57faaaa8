//! Scroll event source shared by mounted views.
//!
//! Listeners run synchronously inside [`Viewport::scroll_to`], so once a
//! listener's [`Subscription`] is released no later scroll event can reach it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::lifecycle::Subscription;

type Listener = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct Viewport {
    listeners: Arc<Mutex<Listeners>>,
    offset: Arc<Mutex<f64>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical scroll offset in px.
    pub fn offset(&self) -> f64 {
        *self.offset.lock()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    /// Attach a scroll listener. It stays attached until the returned
    /// subscription is released or dropped.
    pub fn listen(&self, listener: impl Fn(f64) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut listeners = self.listeners.lock();
            let id = listeners.next_id;
            listeners.next_id += 1;
            let listener: Listener = Arc::new(listener);
            listeners.entries.push((id, listener));
            id
        };

        let listeners = self.listeners.clone();
        Subscription::new("scroll-listener", move || {
            listeners.lock().entries.retain(|(entry, _)| *entry != id);
        })
    }

    /// Record a new offset and notify every attached listener.
    pub fn scroll_to(&self, offset: f64) {
        *self.offset.lock() = offset;
        // snapshot, so a listener may detach itself without deadlocking
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            (*listener)(offset);
        }
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("offset", &self.offset())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
