use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::typewriter::scheduler::{Scheduler, Task, TimerId};

/// Manually advanced clock for deterministic animation tests.
///
/// Nothing runs until [`VirtualClock::advance`] or
/// [`VirtualClock::run_next`] is called. Due tasks fire in deadline order,
/// ties in scheduling order, and tasks they schedule are eligible within the
/// same advance.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Arc<Mutex<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time since creation.
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Delay until the earliest pending task, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        let inner = self.inner.lock();
        inner
            .queue
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(inner.now))
    }

    /// Move time forward by `by`, running every task that comes due.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.lock().now + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        let mut inner = self.inner.lock();
        if inner.now < target {
            inner.now = target;
        }
    }

    /// Jump to the earliest pending task and run it.
    ///
    /// Returns how far time moved, or `None` when nothing is scheduled.
    pub fn run_next(&self) -> Option<Duration> {
        let (elapsed, task) = {
            let mut inner = self.inner.lock();
            let ((deadline, _), task) = inner.queue.pop_first()?;
            let elapsed = deadline.saturating_sub(inner.now);
            inner.now = inner.now.max(deadline);
            (elapsed, task)
        };
        task();
        Some(elapsed)
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut inner = self.inner.lock();
        let (deadline, _) = *inner.queue.keys().next()?;
        if deadline > target {
            return None;
        }
        let (_, task) = inner.queue.pop_first()?;
        inner.now = inner.now.max(deadline);
        Some(task)
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let deadline = inner.now + delay;
        inner.queue.insert((deadline, seq), task);
        TimerId(seq)
    }

    fn cancel(&self, id: TimerId) {
        self.inner.lock().queue.retain(|(_, seq), _| *seq != id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let log = Arc::clone(&handle);
            Box::new(move || log.lock().push(label))
        };
        (log, make)
    }

    #[test]
    fn runs_due_tasks_in_deadline_order() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(Duration::from_millis(30), task("late"));
        clock.schedule(Duration::from_millis(10), task("early"));
        clock.schedule(Duration::from_millis(10), task("early-second"));

        clock.advance(Duration::from_millis(20));
        assert_eq!(*log.lock(), vec!["early", "early-second"]);
        assert_eq!(clock.now(), Duration::from_millis(20));
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_deadline(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn tasks_scheduled_by_tasks_run_within_same_advance() {
        let clock = VirtualClock::new();
        let count = Arc::new(Mutex::new(0u32));

        let inner_clock = clock.clone();
        let inner_count = Arc::clone(&count);
        clock.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                *inner_count.lock() += 1;
                let again = Arc::clone(&inner_count);
                inner_clock.schedule(
                    Duration::from_millis(5),
                    Box::new(move || *again.lock() += 1),
                );
            }),
        );

        clock.advance(Duration::from_millis(10));
        assert_eq!(*count.lock(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancelled_task_is_dropped() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        let id = clock.schedule(Duration::from_millis(1), task("never"));
        clock.cancel(id);
        clock.advance(Duration::from_secs(1));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn run_next_reports_elapsed_time() {
        let clock = VirtualClock::new();
        let (_log, task) = recorder();
        clock.schedule(Duration::from_millis(100), task("a"));
        assert_eq!(clock.run_next(), Some(Duration::from_millis(100)));
        assert_eq!(clock.run_next(), None);
        assert_eq!(clock.now(), Duration::from_millis(100));
    }
}
