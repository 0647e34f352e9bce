//! Frame-driven timer queue.
//!
//! The queue keeps its own clock. The owner advances it once per frame and drains the tasks
//! that came due, in due order. Nothing runs on another thread and nothing blocks.
//!
//! ```
//! use std::time::Duration;
//! use vista_ui::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Duration::from_secs(1), "fade");
//!
//! timers.advance(Duration::from_millis(500));
//! assert!(timers.pop_due().is_none());
//!
//! timers.advance(Duration::from_millis(500));
//! assert_eq!(timers.pop_due().map(|(_, task)| task), Some("fade"));
//! ```

use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry<T> {
    id: TimerId,
    due: Duration,
    task: T,
}

/// Queue of tasks to run after a delay.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current queue time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once `delay` has passed from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        self.schedule_at(self.now + delay, task)
    }

    /// Run `task` at an absolute queue time. A time in the past is due on the next drain.
    pub fn schedule_at(&mut self, due: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry { id, due, task });
        id
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Move the clock forward.
    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Remove and return the earliest task that is due, with the time it was due at.
    ///
    /// Tasks due at the same time come out in scheduling order.
    pub fn pop_due(&mut self) -> Option<(Duration, T)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= self.now)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)?;

        let entry = self.entries.swap_remove(index);
        Some((entry.due, entry.task))
    }

    /// Drop every pending task. The clock keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
