//! Interaction mode switching
//!
//! Holding both hands as fists for one second toggles between cursor
//! control and model manipulation. The toggle is edge-triggered: one
//! flip per continuous hold, re-armed only after a non-fist frame.

use super::fist::is_fist;
use super::hold::HoldTimer;
use super::landmarks::HandObservation;

/// Default hold before the mode flips
pub const MODE_HOLD_MS: f64 = 1000.0;

/// Which sub-controller owns single-hand input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Cursor,
    Model,
}

impl InteractionMode {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Cursor => "cursor",
            InteractionMode::Model => "model",
        }
    }

    fn toggled(self) -> Self {
        match self {
            InteractionMode::Cursor => InteractionMode::Model,
            InteractionMode::Model => InteractionMode::Cursor,
        }
    }
}

pub struct ModeController {
    mode: InteractionMode,
    hold: HoldTimer,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: InteractionMode::Cursor,
            hold: HoldTimer::new(MODE_HOLD_MS),
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn set_hold_ms(&mut self, threshold_ms: f64) {
        self.hold.set_threshold(threshold_ms);
    }

    /// Runs the dual-fist hold against this frame. Returns the new
    /// mode when a completed hold toggles it.
    pub fn update(&mut self, hands: &[HandObservation], now_ms: f64) -> Option<InteractionMode> {
        // The perception layer's hand ordering is not stable frame to
        // frame, so the test is symmetric: both observations must be
        // fists, whichever comes first.
        let both_fists = hands.len() == 2 && hands.iter().all(is_fist);

        if !both_fists {
            self.hold.clear();
            return None;
        }

        if self.hold.advance(now_ms) {
            self.mode = self.mode.toggled();
            Some(self.mode)
        } else {
            None
        }
    }
}
