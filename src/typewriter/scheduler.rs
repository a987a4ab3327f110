use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Deferred callback run by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a scheduled callback so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One-shot timer capability.
///
/// Implementations must never run a task from inside `schedule` or `cancel`;
/// callers may hold their own locks across both.
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Drop a pending task. Unknown or already fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

/// Scheduler backed by `tokio::time::sleep` on a runtime handle.
pub struct TokioScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    tasks: Arc<Mutex<HashMap<TimerId, JoinHandle<()>>>>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(0),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Scheduler bound to the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let registry = Arc::clone(&self.tasks);

        // Hold the registry while spawning so a zero-delay timer cannot
        // deregister itself before it has been inserted.
        let mut tasks = self.tasks.lock();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if registry.lock().remove(&id).is_some() {
                task();
            }
        });
        tasks.insert(id, handle);
        id
    }

    fn cancel(&self, id: TimerId) {
        if let Some(handle) = self.tasks.lock().remove(&id) {
            handle.abort();
            tracing::trace!(timer = id.0, "timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.lock().drain() {
            handle.abort();
        }
    }
}
