use std::time::Duration;

use tracing::debug;

use super::scheduler::Scheduler;
use crate::ports::Document;

pub const PRESSED_CLASS: &str = "pressed";

/// Brief pressed state on clicked buttons and nav links
#[derive(Debug)]
pub struct PressFeedback {
    hold: Duration,
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}

impl PressFeedback {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn press<T: Clone>(
        &self,
        id: &str,
        doc: &mut dyn Document,
        scheduler: &mut Scheduler<T>,
        release: T,
    ) {
        match doc.set_class(id, PRESSED_CLASS, true) {
            Ok(()) => {
                scheduler.set_timeout(self.hold, release);
            }
            Err(err) => debug!("Press feedback skipped: {}", err),
        }
    }

    pub fn release(&self, id: &str, doc: &mut dyn Document) {
        if let Err(err) = doc.set_class(id, PRESSED_CLASS, false) {
            debug!("Release skipped: {}", err);
        }
    }
}
