use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::lifecycle::Subscription;

pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Index of the featured testimonial, advanced by a timer.
///
/// The home page renders every testimonial and does not read this index.
#[derive(Debug, Clone)]
pub struct Rotation {
    index: Arc<AtomicUsize>,
    count: usize,
}

impl Rotation {
    /// Start the timer. Must be called from within a tokio runtime.
    pub fn start(count: usize, period: Duration) -> (Self, Subscription) {
        let rotation = Self {
            index: Arc::new(AtomicUsize::new(0)),
            count,
        };
        if count == 0 {
            return (rotation, Subscription::inactive("testimonial-rotation"));
        }

        let stop = Arc::new(AtomicBool::new(false));
        let start = tokio::time::Instant::now() + period;
        let handle = tokio::spawn({
            let index = rotation.index.clone();
            let stop = stop.clone();
            async move {
                let mut ticker = tokio::time::interval_at(start, period);
                loop {
                    ticker.tick().await;
                    if stop.load(Ordering::Acquire) {
                        break;
                    }
                    let prev = index.load(Ordering::Acquire);
                    let next = (prev + 1) % count;
                    index.store(next, Ordering::Release);
                    tracing::trace!(next, "testimonial rotation advanced");
                }
            }
        });

        (rotation, Subscription::timer("testimonial-rotation", handle, stop))
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
