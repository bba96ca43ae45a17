//! Gesture interpretation engine - stateful per-frame logic
//!
//! Re-exports only. All logic in submodules. Nothing in here touches
//! the DOM or the wasm boundary; the bridge supplies landmarks and a
//! timestamp and applies the returned effects.

mod engine;
mod fist;
mod hold;
mod landmarks;
mod mode;
mod model;
mod pointer;

pub use engine::{FrameOutput, GestureEngine};
pub use fist::is_fist;
pub use hold::HoldTimer;
pub use landmarks::{HandObservation, Landmark, HAND_LANDMARK_COUNT};
pub use mode::{InteractionMode, ModeController, MODE_HOLD_MS};
pub use model::{ModelManipulationController, ModelTransform, SCALE_MAX, SCALE_MIN};
pub use pointer::{
    PointerController, PointerOutput, Viewport, DWELL_MS, POINTER_SIZE, STILLNESS_RADIUS,
};
