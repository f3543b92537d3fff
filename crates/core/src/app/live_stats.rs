use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::format::{format_thousands, parse_grouped};
use crate::ports::Document;

/// Nudges the commit counter upward now and then so the page feels alive
#[derive(Debug)]
pub struct LiveStats {
    element_id: String,
    rng: StdRng,
}

impl LiveStats {
    pub fn new(element_id: &str) -> Self {
        Self::with_rng(element_id, StdRng::from_entropy())
    }

    pub fn seeded(element_id: &str, seed: u64) -> Self {
        Self::with_rng(element_id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(element_id: &str, rng: StdRng) -> Self {
        Self {
            element_id: element_id.to_string(),
            rng,
        }
    }

    /// Add 0, 1 or 2 to the counter. Returns the new value, or `None` when the
    /// element is missing or its text is not a number.
    pub fn tick(&mut self, doc: &mut dyn Document) -> Option<u64> {
        let text = doc.text(&self.element_id)?;
        let Some(current) = parse_grouped(&text) else {
            debug!("Live stats skipped, #{} reads {:?}", self.element_id, text);
            return None;
        };
        let next = current + self.rng.gen_range(0..=2);
        doc.set_text(&self.element_id, &format_thousands(next)).ok()?;
        Some(next)
    }
}
