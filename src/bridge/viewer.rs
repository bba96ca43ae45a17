//! Viewer-side bridge: model readiness, transform readout, tuning
//!
//! The JS render loop polls `get_model_transform` once per display
//! refresh and applies it to the Three.js target object. Nothing here
//! mutates gesture state except the readiness flag and the tuning
//! thresholds.

use wasm_bindgen::prelude::*;

use super::frames::with_engine;

/// Called from JS when the glTF target object finishes loading.
/// Until then, model-mode frames skip their transform writes.
#[wasm_bindgen]
pub fn set_model_ready() {
    with_engine(|engine| engine.set_model_ready());
    web_sys::console::log_1(&"Model target ready".into());
}

/// Last-written transform as `[rotation_x, rotation_y, scale]`
/// (rotations in radians).
#[wasm_bindgen]
pub fn get_model_transform() -> Vec<f32> {
    with_engine(|engine| {
        let t = engine.transform();
        vec![t.rotation_x, t.rotation_y, t.scale]
    })
}

/// Current interaction mode, "cursor" or "model" (for debug overlays)
#[wasm_bindgen]
pub fn get_interaction_mode() -> String {
    with_engine(|engine| engine.mode().name().to_string())
}

/// Runtime tuning of the gesture thresholds: dual-fist hold duration,
/// dwell-click duration, and the stillness radius in px.
#[wasm_bindgen]
pub fn set_gesture_params(mode_hold_ms: f64, dwell_ms: f64, still_px: f32) {
    with_engine(|engine| engine.set_params(mode_hold_ms, dwell_ms, still_px));
    web_sys::console::log_1(
        &format!(
            "Gesture params: hold {}ms, dwell {}ms, stillness {}px",
            mode_hold_ms, dwell_ms, still_px
        )
        .into(),
    );
}
