//! Cursor-mode pointer
//!
//! Tracks the index fingertip of the first observed hand, mirrored
//! horizontally so on-screen motion matches a user facing the camera,
//! and clamped to the viewport. Holding the pointer still for five
//! seconds fires one synthetic click; it re-arms only after the
//! pointer moves again.

use super::hold::HoldTimer;
use super::landmarks::{HandObservation, INDEX_TIP};

/// Indicator size in px; the clamp keeps the whole dot on screen
pub const POINTER_SIZE: f32 = 20.0;
/// Frame-to-frame displacement below this counts as "still"
pub const STILLNESS_RADIUS: f32 = 10.0;
/// Default dwell before a click fires
pub const DWELL_MS: f64 = 5000.0;

/// Viewport dimensions in px, sampled by the bridge each frame
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// What the indicator should show after a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutput {
    Hidden,
    At { x: f32, y: f32, click: bool },
}

pub struct PointerController {
    previous: Option<(f32, f32)>,
    stillness: HoldTimer,
    still_radius: f32,
}

impl PointerController {
    pub fn new() -> Self {
        Self {
            previous: None,
            stillness: HoldTimer::new(DWELL_MS),
            still_radius: STILLNESS_RADIUS,
        }
    }

    pub fn set_dwell_ms(&mut self, threshold_ms: f64) {
        self.stillness.set_threshold(threshold_ms);
    }

    pub fn set_still_radius(&mut self, radius_px: f32) {
        self.still_radius = radius_px;
    }

    pub fn update(&mut self, hand: &HandObservation, viewport: Viewport, now_ms: f64) -> PointerOutput {
        let tip = hand.landmark(INDEX_TIP);

        // Mirrored horizontally; clamped so the indicator stays inside
        let x = ((1.0 - tip.x) * viewport.width).clamp(0.0, (viewport.width - POINTER_SIZE).max(0.0));
        let y = (tip.y * viewport.height).clamp(0.0, (viewport.height - POINTER_SIZE).max(0.0));

        let mut click = false;
        if let Some((px, py)) = self.previous {
            let dx = x - px;
            let dy = y - py;
            let displacement = (dx * dx + dy * dy).sqrt();

            if displacement < self.still_radius {
                click = self.stillness.advance(now_ms);
            } else {
                self.stillness.clear();
            }
        }
        self.previous = Some((x, y));

        PointerOutput::At { x, y, click }
    }

    /// Cursor mode is inactive (wrong mode or no hands): hide the
    /// indicator and forget the dwell in progress.
    pub fn deactivate(&mut self) -> PointerOutput {
        self.previous = None;
        self.stillness.clear();
        PointerOutput::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn hand_at(x: f32, y: f32) -> HandObservation {
        HandObservation::open().with_landmark(INDEX_TIP, x, y)
    }

    fn position(output: PointerOutput) -> (f32, f32) {
        match output {
            PointerOutput::At { x, y, .. } => (x, y),
            PointerOutput::Hidden => panic!("pointer hidden"),
        }
    }

    fn clicked(output: PointerOutput) -> bool {
        matches!(output, PointerOutput::At { click: true, .. })
    }

    #[test]
    fn test_center_fingertip_maps_to_viewport_center() {
        let mut ctl = PointerController::new();
        let out = ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 0.0);
        assert_eq!(position(out), (400.0, 300.0));
    }

    #[test]
    fn test_horizontal_mirroring() {
        let mut ctl = PointerController::new();
        // Fingertip at the camera's right edge lands on screen left
        let out = ctl.update(&hand_at(0.9, 0.5), VIEWPORT, 0.0);
        let (x, _) = position(out);
        assert!((x - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_clamped_at_landmark_extremes() {
        let mut ctl = PointerController::new();
        let (x, y) = position(ctl.update(&hand_at(0.0, 1.0), VIEWPORT, 0.0));
        assert_eq!((x, y), (780.0, 580.0));

        let (x, y) = position(ctl.update(&hand_at(1.0, 0.0), VIEWPORT, 100.0));
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn test_dwell_fires_one_click() {
        let mut ctl = PointerController::new();
        let hand = hand_at(0.5, 0.5);
        assert!(!clicked(ctl.update(&hand, VIEWPORT, 0.0))); // no previous yet
        assert!(!clicked(ctl.update(&hand, VIEWPORT, 100.0))); // dwell starts
        assert!(!clicked(ctl.update(&hand, VIEWPORT, 4000.0)));
        assert!(clicked(ctl.update(&hand, VIEWPORT, 5101.0)));
        // Still still: latched, no repeat click
        assert!(!clicked(ctl.update(&hand, VIEWPORT, 5200.0)));
        assert!(!clicked(ctl.update(&hand, VIEWPORT, 20_000.0)));
    }

    #[test]
    fn test_movement_rearms_the_click() {
        let mut ctl = PointerController::new();
        let hand = hand_at(0.5, 0.5);
        ctl.update(&hand, VIEWPORT, 0.0);
        ctl.update(&hand, VIEWPORT, 100.0);
        assert!(clicked(ctl.update(&hand, VIEWPORT, 5101.0)));

        // 0.05 normalized = 40 px, clears the latch
        let moved = hand_at(0.55, 0.5);
        assert!(!clicked(ctl.update(&moved, VIEWPORT, 5200.0)));
        assert!(!clicked(ctl.update(&moved, VIEWPORT, 5300.0))); // new dwell starts
        assert!(clicked(ctl.update(&moved, VIEWPORT, 10_301.0)));
    }

    #[test]
    fn test_movement_resets_a_partial_dwell() {
        let mut ctl = PointerController::new();
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 0.0);
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 100.0);
        ctl.update(&hand_at(0.6, 0.5), VIEWPORT, 3000.0); // 80 px jump
        // Old deadline passes without a click
        assert!(!clicked(ctl.update(&hand_at(0.6, 0.5), VIEWPORT, 5200.0)));
        assert!(clicked(ctl.update(&hand_at(0.6, 0.5), VIEWPORT, 10_201.0)));
    }

    #[test]
    fn test_small_jitter_keeps_the_dwell() {
        let mut ctl = PointerController::new();
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 0.0);
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 100.0);
        // 0.005 normalized = 4 px, under the 10 px stillness radius
        assert!(!clicked(ctl.update(&hand_at(0.505, 0.5), VIEWPORT, 3000.0)));
        assert!(clicked(ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 5101.0)));
    }

    #[test]
    fn test_deactivate_hides_and_forgets() {
        let mut ctl = PointerController::new();
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 0.0);
        ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 100.0);
        assert_eq!(ctl.deactivate(), PointerOutput::Hidden);

        // Reappearing has no previous position, so no instant dwell
        assert!(!clicked(ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 5200.0)));
        assert!(!clicked(ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 5300.0)));
        assert!(clicked(ctl.update(&hand_at(0.5, 0.5), VIEWPORT, 10_301.0)));
    }
}
