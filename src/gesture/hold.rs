//! Hold-gesture debouncing
//!
//! A `HoldTimer` represents "the tracked condition has been
//! continuously true since time T". The caller advances it on every
//! frame the condition holds and clears it the moment the condition
//! drops. It fires at most once per continuous hold: after firing it
//! stays latched until cleared, so a pose held past the threshold does
//! not retrigger.

pub struct HoldTimer {
    threshold_ms: f64,
    started_at: Option<f64>,
    fired: bool,
}

impl HoldTimer {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            started_at: None,
            fired: false,
        }
    }

    pub fn set_threshold(&mut self, threshold_ms: f64) {
        self.threshold_ms = threshold_ms;
    }

    /// The tracked condition is true at `now_ms`. Returns true exactly
    /// once, on the first frame past the threshold.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if self.fired {
            return false;
        }
        match self.started_at {
            None => {
                self.started_at = Some(now_ms);
                false
            }
            Some(start) if now_ms - start > self.threshold_ms => {
                self.started_at = None;
                self.fired = true;
                true
            }
            Some(_) => false,
        }
    }

    /// The tracked condition dropped; forget the hold and re-arm.
    pub fn clear(&mut self) {
        self.started_at = None;
        self.fired = false;
    }
}
