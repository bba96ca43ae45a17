//! Model-mode manipulation
//!
//! Rotation is an absolute pose mapping: the model snaps to the wrist
//! position every frame, no smoothing or velocity integration. Scale
//! follows the thumb-index pinch distance as a frame-to-frame ratio,
//! clamped to [0.5, 3].

use std::f32::consts::PI;

use super::landmarks::{HandObservation, INDEX_TIP, THUMB_TIP, WRIST};

pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 3.0;

/// Last-written pose, read back by the render loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub rotation_x: f32, // radians
    pub rotation_y: f32, // radians
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

pub struct ModelManipulationController {
    pinch_baseline: Option<f32>,
    scale: f32,
}

impl ModelManipulationController {
    pub fn new() -> Self {
        Self {
            pinch_baseline: None,
            scale: 1.0,
        }
    }

    pub fn update(&mut self, hand: &HandObservation) -> ModelTransform {
        let wrist = hand.landmark(WRIST);
        let rotation_y = (wrist.x - 0.5) * 2.0 * PI;
        let rotation_x = (wrist.y - 0.5) * PI;

        let distance = hand.landmark(THUMB_TIP).distance_to(&hand.landmark(INDEX_TIP));
        match self.pinch_baseline {
            Some(baseline) if baseline > f32::EPSILON => {
                self.scale = (self.scale * distance / baseline).clamp(SCALE_MIN, SCALE_MAX);
                // Re-seed every frame so a static pinch holds a ratio
                // of 1.0 instead of compounding the same factor
                self.pinch_baseline = Some(distance);
            }
            _ => {
                // Pinch begins: seed the baseline, scale unchanged
                self.pinch_baseline = Some(distance);
            }
        }

        ModelTransform {
            rotation_x,
            rotation_y,
            scale: self.scale,
        }
    }

    /// Model mode is inactive (wrong mode or no hands): the pinch
    /// gesture ends and the next one re-seeds. Scale persists.
    pub fn deactivate(&mut self) {
        self.pinch_baseline = None;
    }
}
