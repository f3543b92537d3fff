//! Cooperative timer queue driven by an explicit clock.
//!
//! The scheduler never runs anything itself. The owner pulls due tasks with
//! [`Scheduler::pop_due`] and dispatches them, so every side effect happens on
//! the caller's thread and tests can step time deterministically.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

/// Handle for cancelling a pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    task: T,
    period: Option<Duration>,
    /// Sequence number of the queue entry currently armed for this timer
    seq: u64,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, TimerId)>>,
    timers: HashMap<TimerId, Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
            timers: HashMap::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time: the due time of the task being dispatched, or
    /// the last time passed to [`Scheduler::settle`]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` from now
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        self.arm(delay, None, task)
    }

    /// Run `task` every `period`, first at now + `period`
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.arm(period, Some(period), task)
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the earliest live timer
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|Reverse((_, seq, id))| self.timers.get(id).is_some_and(|t| t.seq == *seq))
            .map(|Reverse((due, _, _))| *due)
            .min()
    }

    /// Pop the next task due at or before `until`.
    ///
    /// Tasks come out ordered by due time, then by the order they were armed.
    /// A repeating timer is re-armed relative to its own due time before it is
    /// returned, so cancelling it from inside the dispatch stops it.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        loop {
            let Reverse((due, seq, id)) = *self.queue.peek()?;
            if due > until {
                return None;
            }
            self.queue.pop();

            let live = self.timers.get(&id).is_some_and(|t| t.seq == seq);
            if !live {
                continue;
            }
            self.now = self.now.max(due);

            let period = self.timers.get(&id).and_then(|t| t.period);
            let task = match period {
                Some(period) => {
                    let seq = self.bump_seq();
                    self.queue.push(Reverse((due + period, seq, id)));
                    let timer = self.timers.get_mut(&id)?;
                    timer.seq = seq;
                    timer.task.clone()
                }
                None => self.timers.remove(&id)?.task,
            };
            return Some((id, task));
        }
    }

    /// Move the clock to `until` once every due task has been dispatched
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.queue.push(Reverse((self.now + delay, seq, id)));
        self.timers.insert(id, Timer { task, period, seq });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
