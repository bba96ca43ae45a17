//! Per-frame composition of the gesture controllers
//!
//! Owns all cross-frame state (mode, hold timers, pointer position,
//! pinch baseline, last-written transform) and returns each frame's
//! effects as plain data for the bridge to apply. The caller supplies
//! the clock, so every timing property is testable.

use super::landmarks::HandObservation;
use super::mode::{InteractionMode, ModeController};
use super::model::{ModelManipulationController, ModelTransform};
use super::pointer::{PointerController, PointerOutput, Viewport};

/// Effects produced by one perception frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Set on the frame a dual-fist hold completes
    pub mode_change: Option<InteractionMode>,
    pub pointer: PointerOutput,
    /// New transform to hand to the renderer, when one was written
    pub transform: Option<ModelTransform>,
    /// Model mode wanted to write but the render target isn't loaded
    pub awaiting_model: bool,
}

pub struct GestureEngine {
    mode: ModeController,
    pointer: PointerController,
    model: ModelManipulationController,
    transform: ModelTransform,
    model_ready: bool,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self {
            mode: ModeController::new(),
            pointer: PointerController::new(),
            model: ModelManipulationController::new(),
            transform: ModelTransform::default(),
            model_ready: false,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode.mode()
    }

    /// Last-written transform, read by the render loop
    pub fn transform(&self) -> ModelTransform {
        self.transform
    }

    /// The renderer's target object finished loading
    pub fn set_model_ready(&mut self) {
        self.model_ready = true;
    }

    pub fn set_params(&mut self, mode_hold_ms: f64, dwell_ms: f64, still_px: f32) {
        self.mode.set_hold_ms(mode_hold_ms);
        self.pointer.set_dwell_ms(dwell_ms);
        self.pointer.set_still_radius(still_px);
    }

    /// Runs one perception frame. A mode toggle takes effect within
    /// the same frame, so the first hand immediately drives the newly
    /// active controller.
    pub fn update(
        &mut self,
        hands: &[HandObservation],
        viewport: Viewport,
        now_ms: f64,
    ) -> FrameOutput {
        let mode_change = self.mode.update(hands, now_ms);

        let pointer = match hands.first() {
            Some(hand) if self.mode.mode() == InteractionMode::Cursor => {
                self.pointer.update(hand, viewport, now_ms)
            }
            _ => self.pointer.deactivate(),
        };

        let (transform, awaiting_model) = match hands.first() {
            Some(hand) if self.mode.mode() == InteractionMode::Model => {
                if self.model_ready {
                    self.transform = self.model.update(hand);
                    (Some(self.transform), false)
                } else {
                    // Not an error, just not ready yet; next frame retries
                    (None, true)
                }
            }
            _ => {
                self.model.deactivate();
                (None, false)
            }
        };

        FrameOutput {
            mode_change,
            pointer,
            transform,
            awaiting_model,
        }
    }
}
