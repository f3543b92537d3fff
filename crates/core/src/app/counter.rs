use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use super::scheduler::{Scheduler, TimerId};
use crate::format::format_thousands;
use crate::ports::Document;

/// Identifies one running counter animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(u64);

/// Counters started when the page boots: element id, target, duration
pub const PAGE_COUNTERS: [(&str, u64, u64); 3] = [
    ("repos-count", 1250, 2000),
    ("commits-count", 15600, 2500),
    ("collaborators-count", 45, 1500),
];

#[derive(Debug)]
struct CounterRun {
    element_id: String,
    target: f64,
    increment: f64,
    current: f64,
    timer: TimerId,
}

/// Linear 0 -> target counters sampled on a fixed tick
#[derive(Debug)]
pub struct CounterAnimator {
    tick: Duration,
    next_id: u64,
    runs: HashMap<CounterId, CounterRun>,
}

impl CounterAnimator {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(1)),
            next_id: 0,
            runs: HashMap::new(),
        }
    }

    /// Start animating `element_id` from 0 to `target` over `duration_ms`.
    ///
    /// Each call is an independent animation; starting the same element twice
    /// before the first finishes makes them race for the text.
    pub fn animate<T: Clone>(
        &mut self,
        element_id: &str,
        target: u64,
        duration_ms: u64,
        scheduler: &mut Scheduler<T>,
        task: impl FnOnce(CounterId) -> T,
    ) -> CounterId {
        let id = CounterId(self.next_id);
        self.next_id += 1;

        let steps = (duration_ms as f64 / self.tick.as_millis() as f64).max(1.0);
        let timer = scheduler.set_interval(self.tick, task(id));
        debug!("Animating #{} to {} over {}ms", element_id, target, duration_ms);

        self.runs.insert(
            id,
            CounterRun {
                element_id: element_id.to_string(),
                target: target as f64,
                increment: target as f64 / steps,
                current: 0.0,
                timer,
            },
        );
        id
    }

    /// Advance one counter by a tick and write its display text.
    /// Returns the displayed value, or `None` if the counter is not running.
    pub fn tick<T: Clone>(
        &mut self,
        id: CounterId,
        doc: &mut dyn Document,
        scheduler: &mut Scheduler<T>,
    ) -> Option<u64> {
        let run = self.runs.get_mut(&id)?;
        run.current += run.increment;

        let finished = run.current >= run.target;
        if finished {
            run.current = run.target;
            scheduler.cancel(run.timer);
        }

        let shown = run.current.floor() as u64;
        if let Err(err) = doc.set_text(&run.element_id, &format_thousands(shown)) {
            debug!("Counter tick skipped: {}", err);
        }

        if finished {
            self.runs.remove(&id);
        }
        Some(shown)
    }

    pub fn is_running(&self, id: CounterId) -> bool {
        self.runs.contains_key(&id)
    }

    pub fn running(&self) -> usize {
        self.runs.len()
    }
}
